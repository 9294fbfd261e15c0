pub mod library;
pub mod silhouette;
