mod demand_context;
mod html_template;
mod map_composer;
mod map_layer;
mod renderable_document;

pub use map_composer::MapComposer;
pub use map_layer::MapLayer;
pub use renderable_document::RenderableDocument;
