pub mod filter_bar;
pub mod network_graph;
