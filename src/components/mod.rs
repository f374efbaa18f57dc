pub mod narrative_view;
