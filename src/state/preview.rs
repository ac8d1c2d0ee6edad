// Image preview state - lightbox navigation over a listing's photos

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewAction {
    Close,
    Next,
    Previous,
}

#[derive(Debug, Default)]
pub struct ImagePreviewController {
    images: Vec<String>,
    current_index: usize,
    open: bool,
}

impl ImagePreviewController {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            current_index: 0,
            open: false,
        }
    }

    /// Swap the gallery (a different listing was loaded). Closes the preview.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
        self.current_index = 0;
        self.open = false;
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> Option<&str> {
        if self.open {
            self.images.get(self.current_index).map(String::as_str)
        } else {
            None
        }
    }

    pub fn open(&mut self, at_index: usize) {
        if self.images.is_empty() {
            return;
        }
        self.current_index = at_index.min(self.images.len() - 1);
        self.open = true;
    }

    pub fn next(&mut self) {
        if !self.open || self.images.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.images.len();
    }

    pub fn previous(&mut self) {
        if !self.open || self.images.is_empty() {
            return;
        }
        let len = self.images.len();
        self.current_index = (self.current_index + len - 1) % len;
    }

    pub fn jump_to(&mut self, index: usize) {
        if index < self.images.len() {
            self.current_index = index;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Key actions only reach the gallery while the overlay is open.
    /// Returns true if the action was consumed.
    pub fn handle_action(&mut self, action: PreviewAction) -> bool {
        if !self.open {
            return false;
        }
        match action {
            PreviewAction::Close => self.close(),
            PreviewAction::Next => self.next(),
            PreviewAction::Previous => self.previous(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> ImagePreviewController {
        ImagePreviewController::new((0..n).map(|i| format!("https://img/{i}.jpg")).collect())
    }

    #[test]
    fn test_empty_gallery_never_opens() {
        let mut preview = gallery(0);
        preview.open(0);
        assert!(!preview.is_open());
        preview.next();
        preview.previous();
        assert_eq!(preview.current_index(), 0);
        assert_eq!(preview.current_image(), None);
    }

    #[test]
    fn test_open_clamps_to_last_index() {
        let mut preview = gallery(3);
        preview.open(5);
        assert!(preview.is_open());
        assert_eq!(preview.current_index(), 2);
        assert_eq!(preview.current_image(), Some("https://img/2.jpg"));
    }

    #[test]
    fn test_next_full_cycle_returns_to_start() {
        for n in 2..6 {
            for start in 0..n {
                let mut preview = gallery(n);
                preview.open(start);
                for _ in 0..n {
                    preview.next();
                }
                assert_eq!(preview.current_index(), start);
            }
        }
    }

    #[test]
    fn test_previous_wraps_to_end() {
        let mut preview = gallery(4);
        preview.open(0);
        preview.previous();
        assert_eq!(preview.current_index(), 3);
        preview.next();
        assert_eq!(preview.current_index(), 0);
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut preview = gallery(1);
        preview.open(0);
        preview.next();
        assert_eq!(preview.current_index(), 0);
        preview.previous();
        assert_eq!(preview.current_index(), 0);
    }

    #[test]
    fn test_jump_to_ignores_out_of_range() {
        let mut preview = gallery(3);
        preview.open(0);
        preview.jump_to(2);
        assert_eq!(preview.current_index(), 2);
        preview.jump_to(3);
        assert_eq!(preview.current_index(), 2);
    }

    #[test]
    fn test_close_keeps_index_and_reopen_overrides() {
        let mut preview = gallery(3);
        preview.open(1);
        preview.close();
        assert!(!preview.is_open());
        assert_eq!(preview.current_index(), 1);
        preview.open(0);
        assert_eq!(preview.current_index(), 0);
    }

    #[test]
    fn test_navigation_while_closed_is_inert() {
        let mut preview = gallery(3);
        preview.next();
        preview.previous();
        assert_eq!(preview.current_index(), 0);
    }

    #[test]
    fn test_key_after_close_has_no_effect() {
        let mut preview = gallery(3);
        preview.open(0);
        assert!(preview.handle_action(PreviewAction::Next));
        assert_eq!(preview.current_index(), 1);

        assert!(preview.handle_action(PreviewAction::Close));
        assert!(!preview.handle_action(PreviewAction::Next));
        assert_eq!(preview.current_index(), 1);
        assert!(!preview.is_open());
    }

    #[test]
    fn test_set_images_closes_and_resets() {
        let mut preview = gallery(3);
        preview.open(2);
        preview.set_images(vec!["a".into()]);
        assert!(!preview.is_open());
        assert_eq!(preview.current_index(), 0);
        assert_eq!(preview.images().len(), 1);
    }
}
