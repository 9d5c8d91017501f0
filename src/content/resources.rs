// src/content/resources.rs

use serde::{Deserialize, Serialize};

/// One recommended tool in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub desc: String,
}

/// A labelled group of tools. `icon` is the icon name the dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCategory {
    pub category: String,
    pub icon: String,
    pub tools: Vec<Tool>,
}

impl ResourceCategory {
    /// `Categoría {label}: {names}` line used in the assistant context block.
    pub fn context_line(&self) -> String {
        let names: Vec<&str> = self.tools.iter().map(|t| t.name.as_str()).collect();
        format!("Categoría {}: {}", self.category, names.join(", "))
    }
}
