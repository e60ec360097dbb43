// Strategy catalog domain models

#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl ModelInfo {
    pub fn new(id: String, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hyperparameter {
    pub name: String,
    pub value: f64,
}

impl Hyperparameter {
    pub fn new(name: String, value: f64) -> Self {
        Self { name, value }
    }
}

#[derive(Debug, Clone)]
pub struct StrategyResult {
    pub strategy: String,
    pub return_pct: String,
}

impl StrategyResult {
    pub fn new(strategy: String, return_pct: String) -> Self {
        Self {
            strategy,
            return_pct,
        }
    }
}
