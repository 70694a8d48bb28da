use super::command::ViewerCommand;
use super::document::{DocumentOpener, PageSource};
use super::pixmap::Pixmap;
use super::state::{PageNumber, ViewerState};
use crate::constants::ZOOM_STEP;
use crate::error::Result;
use std::path::Path;

/// Output of a successful render, handed to the display layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub page_index: usize,
    pub page_count: usize,
    pub zoom: f32,
    pub pixmap: Pixmap,
}

impl RenderedPage {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }

    pub fn page_number_text(&self) -> String {
        (self.page_index + 1).to_string()
    }
}

/// Owns the open document and the page/zoom state.
///
/// Every command returns `Ok(Some(page))` when it produced a new render,
/// `Ok(None)` when it was ignored, and `Err` only for failures the user should
/// see (a file that will not open, a page that will not render).
pub struct ViewerController<O: DocumentOpener> {
    opener: O,
    document: Option<O::Document>,
    state: ViewerState,
    max_texture_side: Option<usize>,
}

impl<O: DocumentOpener> ViewerController<O> {
    pub fn new(opener: O) -> Self {
        Self {
            opener,
            document: None,
            state: ViewerState::new(),
            max_texture_side: None,
        }
    }

    /// Largest width or height, in pixels, the display can take. Zoom-in
    /// stops short of it.
    pub fn set_max_texture_side(&mut self, max_side: usize) {
        self.max_texture_side = Some(max_side);
    }

    pub fn max_texture_side(&self) -> Option<usize> {
        self.max_texture_side
    }

    pub fn dispatch(&mut self, command: ViewerCommand) -> Result<Option<RenderedPage>> {
        log::debug!("Dispatching {}", command.name());
        match command {
            ViewerCommand::Load(path) => self.load(&path),
            ViewerCommand::NextPage => self.next_page(),
            ViewerCommand::PreviousPage => self.previous_page(),
            ViewerCommand::JumpToPage(text) => self.jump_to_page(&text),
            ViewerCommand::ZoomIn => self.zoom_in(),
            ViewerCommand::ZoomOut => self.zoom_out(),
        }
    }

    /// Opens `path` and shows its first page. Zoom carries over from the
    /// previous document. On failure the previous document stays loaded.
    pub fn load(&mut self, path: &Path) -> Result<Option<RenderedPage>> {
        if path.as_os_str().is_empty() {
            log::debug!("Ignoring load with empty path");
            return Ok(None);
        }

        let document = self.opener.open(path)?;
        log::info!(
            "Loaded {} ({} pages)",
            path.display(),
            document.page_count()
        );

        // Assigning drops the previous document.
        self.document = Some(document);
        self.state.current_page = 0;
        self.render(self.state.current_page)
    }

    /// Renders `page_index` at the current zoom. Does nothing without a
    /// document or for an index outside the document.
    pub fn render(&self, page_index: usize) -> Result<Option<RenderedPage>> {
        let Some(document) = &self.document else {
            return Ok(None);
        };

        let page_count = document.page_count();
        if page_index >= page_count {
            log::debug!("Page index {} outside 0..{}", page_index, page_count);
            return Ok(None);
        }

        let pixmap = document.render_page(page_index, self.state.zoom)?;
        log::debug!(
            "Rendered page {} at zoom {:.3} ({}x{})",
            page_index + 1,
            self.state.zoom,
            pixmap.width(),
            pixmap.height()
        );

        Ok(Some(RenderedPage {
            page_index,
            page_count,
            zoom: self.state.zoom,
            pixmap,
        }))
    }

    pub fn next_page(&mut self) -> Result<Option<RenderedPage>> {
        let page_count = self.page_count();
        if page_count == 0 || self.state.current_page + 1 >= page_count {
            return Ok(None);
        }
        self.state.current_page += 1;
        self.render(self.state.current_page)
    }

    pub fn previous_page(&mut self) -> Result<Option<RenderedPage>> {
        if !self.is_document_loaded() || self.state.current_page == 0 {
            return Ok(None);
        }
        self.state.current_page -= 1;
        self.render(self.state.current_page)
    }

    /// Jumps to the one-based page typed by the user. Text that is not an
    /// integer, or names a page outside the document, is ignored.
    pub fn jump_to_page(&mut self, text: &str) -> Result<Option<RenderedPage>> {
        if !self.is_document_loaded() {
            return Ok(None);
        }

        let page_number = match PageNumber::parse(text) {
            Ok(page_number) => page_number,
            Err(e) => {
                log::debug!("{}", e);
                return Ok(None);
            }
        };

        let Some(index) = page_number.to_index(self.page_count()) else {
            log::debug!("Page {} outside document", page_number.get());
            return Ok(None);
        };

        self.state.current_page = index;
        self.render(self.state.current_page)
    }

    /// Ignored when the current page would no longer fit the display's
    /// texture limit at the next zoom level.
    pub fn zoom_in(&mut self) -> Result<Option<RenderedPage>> {
        if !self.is_document_loaded() {
            return Ok(None);
        }
        let zoom = self.state.zoom * ZOOM_STEP;
        if !self.fits_texture(self.state.current_page, zoom)? {
            log::info!(
                "Zoom {:.3} would exceed the {}px texture limit",
                zoom,
                self.max_texture_side.unwrap_or_default()
            );
            return Ok(None);
        }
        self.state.zoom = zoom;
        self.render(self.state.current_page)
    }

    pub fn zoom_out(&mut self) -> Result<Option<RenderedPage>> {
        if !self.is_document_loaded() {
            return Ok(None);
        }
        self.state.zoom /= ZOOM_STEP;
        self.render(self.state.current_page)
    }

    fn fits_texture(&self, page_index: usize, zoom: f32) -> Result<bool> {
        let (Some(max_side), Some(document)) = (self.max_texture_side, &self.document) else {
            return Ok(true);
        };
        if page_index >= document.page_count() {
            return Ok(true);
        }
        let (width, height) = document.page_size(page_index)?;
        Ok((width.max(height) * zoom).ceil() <= max_side as f32)
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    pub fn is_document_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Option<&O::Document> {
        self.document.as_ref()
    }

    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, PageSource::page_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewerError;
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    struct FakeDocument {
        page_count: usize,
        renders: Rc<Cell<usize>>,
    }

    impl PageSource for FakeDocument {
        fn page_count(&self) -> usize {
            self.page_count
        }

        fn page_size(&self, _index: usize) -> Result<(f32, f32)> {
            Ok((10.0, 10.0))
        }

        fn render_page(&self, index: usize, zoom: f32) -> Result<Pixmap> {
            if index >= self.page_count {
                return Err(ViewerError::PageOutOfRange {
                    index,
                    page_count: self.page_count,
                });
            }
            self.renders.set(self.renders.get() + 1);
            let side = (10.0 * zoom).round() as u32;
            Pixmap::new(side, side, side as usize * 3, vec![0; (side * side * 3) as usize])
        }
    }

    #[derive(Default)]
    struct FakeOpener {
        renders: Rc<Cell<usize>>,
    }

    impl DocumentOpener for FakeOpener {
        type Document = FakeDocument;

        fn open(&mut self, path: &Path) -> Result<FakeDocument> {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            let page_count = stem
                .parse()
                .map_err(|_| ViewerError::InvalidPdf(path.display().to_string()))?;
            Ok(FakeDocument {
                page_count,
                renders: self.renders.clone(),
            })
        }
    }

    fn loaded(page_count: usize) -> ViewerController<FakeOpener> {
        let mut controller = ViewerController::new(FakeOpener::default());
        controller
            .load(&PathBuf::from(format!("{page_count}.pdf")))
            .expect("fake document loads");
        controller
    }

    #[test]
    fn test_load_renders_first_page() {
        let mut controller = ViewerController::new(FakeOpener::default());
        let page = controller
            .load(Path::new("3.pdf"))
            .expect("load succeeds")
            .expect("first page rendered");

        assert_eq!(page.page_index, 0);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.label(), "Page 1 of 3");
        assert_eq!(page.page_number_text(), "1");
        assert!(controller.is_document_loaded());
    }

    #[test]
    fn test_load_empty_path_is_ignored() {
        let mut controller = ViewerController::new(FakeOpener::default());
        assert_eq!(controller.load(Path::new("")), Ok(None));
        assert!(!controller.is_document_loaded());
    }

    #[test]
    fn test_failed_load_keeps_previous_document() {
        let mut controller = loaded(5);
        controller.next_page().expect("render");

        let result = controller.load(Path::new("corrupt.pdf"));
        assert!(matches!(result, Err(ViewerError::InvalidPdf(_))));
        assert_eq!(controller.page_count(), 5);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_reload_resets_page_but_keeps_zoom() {
        let mut controller = loaded(5);
        controller.next_page().expect("render");
        controller.zoom_in().expect("render");
        let zoom = controller.zoom();

        controller.load(Path::new("8.pdf")).expect("load succeeds");
        assert_eq!(controller.current_page(), 0);
        assert_eq!(controller.page_count(), 8);
        assert_eq!(controller.zoom(), zoom);
    }

    #[test]
    fn test_empty_document_loads_without_render() {
        let mut controller = ViewerController::new(FakeOpener::default());
        assert_eq!(controller.load(Path::new("0.pdf")), Ok(None));
        assert!(controller.is_document_loaded());
        assert_eq!(controller.next_page(), Ok(None));
        assert_eq!(controller.jump_to_page("1"), Ok(None));
        assert_eq!(controller.current_page(), 0);
    }

    #[test]
    fn test_render_out_of_range_is_noop() {
        let controller = loaded(2);
        assert_eq!(controller.render(2), Ok(None));
    }

    #[test]
    fn test_zoom_scales_rendered_pixmap() {
        let mut controller = loaded(1);
        let page = controller
            .zoom_in()
            .expect("render")
            .expect("page rendered");
        assert_eq!(page.pixmap.width(), 12);
        assert!((page.zoom - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_in_stops_at_texture_limit() {
        let mut controller = loaded(1);
        controller.set_max_texture_side(15);

        // 10px page: 12px and 14.4px fit, 17.28px does not.
        assert!(controller.zoom_in().expect("render").is_some());
        assert!(controller.zoom_in().expect("render").is_some());
        let zoom = controller.zoom();

        assert_eq!(controller.zoom_in(), Ok(None));
        assert_eq!(controller.zoom(), zoom);

        let page = controller
            .zoom_out()
            .expect("render")
            .expect("page rendered");
        assert_eq!(page.pixmap.width(), 12);
    }

    #[test]
    fn test_zoom_unbounded_without_texture_limit() {
        let mut controller = loaded(1);
        assert_eq!(controller.max_texture_side(), None);
        for _ in 0..10 {
            controller.zoom_in().expect("render");
        }
        assert!(controller.zoom() > 6.0);
    }

    #[test]
    fn test_ignored_commands_do_not_render() {
        let opener = FakeOpener::default();
        let renders = opener.renders.clone();
        let mut controller = ViewerController::new(opener);
        controller.load(Path::new("2.pdf")).expect("load");
        assert_eq!(renders.get(), 1);

        controller.previous_page().expect("noop");
        controller.jump_to_page("x").expect("noop");
        controller.jump_to_page("3").expect("noop");
        assert_eq!(renders.get(), 1);

        controller.next_page().expect("render");
        controller.next_page().expect("noop");
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn test_dispatch_routes_commands() {
        let mut controller = ViewerController::new(FakeOpener::default());
        controller
            .dispatch(ViewerCommand::Load(PathBuf::from("4.pdf")))
            .expect("load");
        controller.dispatch(ViewerCommand::NextPage).expect("next");
        controller.dispatch(ViewerCommand::NextPage).expect("next");
        controller.dispatch(ViewerCommand::PreviousPage).expect("prev");
        assert_eq!(controller.current_page(), 1);

        let page = controller
            .dispatch(ViewerCommand::JumpToPage("4".into()))
            .expect("jump")
            .expect("rendered");
        assert_eq!(page.label(), "Page 4 of 4");

        controller.dispatch(ViewerCommand::ZoomIn).expect("zoom");
        controller.dispatch(ViewerCommand::ZoomOut).expect("zoom");
        assert!((controller.zoom() - 1.0).abs() < 1e-6);
    }
}
