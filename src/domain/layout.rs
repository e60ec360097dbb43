// Dashboard layout tree
use super::chart::ChartSpec;

/// A composable tree of UI nodes: containers hold children, leaves hold one
/// chart rendering. Layouts are replaced wholesale, never merged.
#[derive(Debug, Clone)]
pub enum LayoutNode {
    Container(Vec<LayoutNode>),
    Chart(ChartSpec),
}

impl LayoutNode {
    /// The initial layout of a freshly constructed dashboard.
    pub fn empty() -> Self {
        LayoutNode::Container(Vec::new())
    }

    /// All chart leaves in document order.
    pub fn charts(&self) -> Vec<&ChartSpec> {
        match self {
            LayoutNode::Chart(spec) => vec![spec],
            LayoutNode::Container(children) => {
                children.iter().flat_map(|child| child.charts()).collect()
            }
        }
    }
}
