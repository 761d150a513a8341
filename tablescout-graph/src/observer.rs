/// Per-run hooks for watching a graph execute. All methods default to no-ops
/// so implementors override only what they care about.
pub trait Observer: Send + Sync {
    fn on_node_enter(&self, _node: &str) {}
    fn on_node_exit(&self, _node: &str) {}
    fn on_error(&self, _node: &str, _error: &str) {}
}
