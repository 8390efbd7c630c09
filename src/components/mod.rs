pub mod force_graph;
pub mod info_cards;
pub mod linear_view;
pub mod quiz_card;
pub mod sidebar;
pub mod tree_view;
pub mod visualizer;
