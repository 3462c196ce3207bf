use std::path::Path;

/// Opaque handle to the embedding shell's text-editing widget.
///
/// The shell wires the widget's change notification back into the
/// session (`Session::document_edited`); the kernel only reads content
/// for saving and toggles visibility on activation. Dropping the handle
/// releases the widget.
pub trait EditorWidget {
    fn content(&self) -> String;

    fn set_hidden(&mut self, hidden: bool);
}

/// Creates a widget seeded with the freshly read file content.
pub trait EditorWidgetFactory {
    fn create(&self, path: &Path, content: &str) -> Box<dyn EditorWidget>;
}
