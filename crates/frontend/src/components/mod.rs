pub mod document_view;
pub mod drawer;
pub mod legend;
pub mod map_view;
