//! R code shown behind the "show code" controls

/// Cross-validation over growing feature counts (intro section)
pub const MODEL_COMPLEXITY_R: &str = r#"# Cross-validation to evaluate model complexity in R
library(caret)
library(glmnet)

evaluate_model_complexity <- function(X, y, max_features) {
  cv_scores <- numeric(max_features)
  
  for (n_features in 1:max_features) {
    X_subset <- X[, 1:n_features, drop = FALSE]
    
    # Define training control
    train_control <- trainControl(method = "cv", number = 5)
    
    # Train the model using cross-validation
    model <- train(x = X_subset, y = y, 
                   method = "lm",
                   trControl = train_control,
                   metric = "Rsquared")
    
    cv_scores[n_features] <- mean(model$results$Rsquared)
  }
  
  return(cv_scores)
}"#;

/// Elasticity-based pricing function (e-commerce section)
pub const DYNAMIC_PRICING_R: &str = r#"# Dynamic pricing algorithm with elasticity in R
calculate_optimal_price <- function(base_price, price_elasticity, 
                                   competitor_prices, 
                                   inventory_level, 
                                   max_inventory) {
  # Price elasticity effect
  elasticity_factor <- 1 - (price_elasticity * 0.1)
  
  # Competitor pricing effect
  avg_competitor_price <- mean(competitor_prices)
  competitor_factor <- 0.3 * (avg_competitor_price / base_price)
  
  # Inventory level effect (lower inventory = higher price)
  inventory_factor <- 1 - (0.2 * (inventory_level / max_inventory))
  
  # Calculate optimal price
  optimal_price <- base_price * elasticity_factor * 
                  competitor_factor * inventory_factor
  
  return(optimal_price)
}"#;
