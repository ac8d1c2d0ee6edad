use crate::config::Config;
use crate::io::{self, IoCommand, IoResult};
use crate::layout;
use crate::message::{AppEvent, EventBus};
use crate::model::{resolve_image, Anchor, Listing, ListingFilter, NavTarget, Route};
use crate::state::{
    BeforeAfterSlider, ContactModal, HeaderVisibilityController, ImagePreviewController,
    NavigationState, PageLoader, ScrollDirectionTracker, ScrollThresholds, StatusLine,
};
use crate::style::Theme;
use crate::subscription::CatalogWatcher;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

pub struct Homefront {
    pub config: Config,
    pub theme: Theme,
    pub assets_dir: PathBuf,

    // Navigation
    pub navigation: NavigationState,
    pub scroll: ScrollDirectionTracker,
    pub header: HeaderVisibilityController,
    /// Programmatic scroll target for the next frame.
    pub scroll_to: Option<f32>,
    pub last_offset: f32,
    /// Home-page section offsets recorded during the last render.
    pub sections: Vec<(Anchor, f32)>,

    // Listings
    pub listings: Vec<Listing>,
    pub listings_loaded: bool,
    pub filter: ListingFilter,
    pub preview: ImagePreviewController,

    // Overlays
    pub loader: PageLoader,
    pub contact: ContactModal,
    pub sliders: Vec<BeforeAfterSlider>,
    pub status: StatusLine,
    pub window_title: String,

    // Plumbing
    pub bus: EventBus,
    pub command_tx: Sender<IoCommand>,
    pub result_rx: Receiver<IoResult>,
    pub watcher: CatalogWatcher,
}

impl Homefront {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, start: Route) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::from_dark(config.is_dark());
        theme.apply(&cc.egui_ctx);

        let (command_tx, result_rx) = io::spawn_worker(cc.egui_ctx.clone());
        if command_tx.send(IoCommand::LoadCatalog(config.catalog_path())).is_err() {
            tracing::error!("io worker unavailable");
        }

        let thresholds = ScrollThresholds::from(&config.scroll);
        let mut loader = PageLoader::new(config.loader.initial(), config.loader.route_change());
        loader.on_start(Instant::now());

        let mut app = Self {
            theme,
            assets_dir: config.assets_dir(),
            navigation: NavigationState::new(start),
            scroll: ScrollDirectionTracker::new(thresholds),
            header: HeaderVisibilityController::new(thresholds.hide_after),
            scroll_to: None,
            last_offset: 0.0,
            sections: Vec::new(),
            listings: Vec::new(),
            listings_loaded: false,
            filter: ListingFilter::default(),
            preview: ImagePreviewController::default(),
            loader,
            contact: ContactModal::default(),
            sliders: vec![BeforeAfterSlider::default(); crate::model::content::STAGING.len()],
            status: StatusLine::default(),
            window_title: String::new(),
            bus: EventBus::new(),
            command_tx,
            result_rx,
            watcher: CatalogWatcher::new(),
            config,
        };
        app.ensure_watcher();
        app
    }

    /// Start watching once the catalog's directory exists.
    fn ensure_watcher(&mut self) {
        if !self.config.catalog.watch || self.watcher.is_active() {
            return;
        }
        let catalog = self.config.catalog_path();
        if !catalog.parent().is_some_and(|dir| dir.is_dir()) {
            return;
        }
        if let Err(e) = self.watcher.watch(&catalog, self.command_tx.clone()) {
            tracing::warn!(error = %e, "catalog watching disabled");
        }
    }

    pub fn image_uri(&self, src: &str) -> String {
        resolve_image(src, &self.assets_dir)
    }

    pub fn find_listing(&self, key: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.key() == key || l.id == key)
    }

    fn process_io_results(&mut self, now: Instant) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                IoResult::CatalogLoaded(listings) => {
                    self.listings = listings;
                    self.listings_loaded = true;
                    self.sync_gallery();
                    self.ensure_watcher();
                }
                IoResult::ContactSent => {
                    self.contact.on_sent(now);
                    self.status.set_info("Message sent".to_string(), now);
                }
                IoResult::ContactFailed(e) => {
                    tracing::warn!(error = %e, "contact not delivered");
                    self.contact.on_send_failed();
                }
                IoResult::Error(e) => {
                    self.listings_loaded = true;
                    self.status.set_error(e, now);
                }
            }
        }
    }

    /// Returns true if any event was handled.
    pub(crate) fn process_events(&mut self, ctx: &egui::Context, now: Instant) -> bool {
        let events = self.bus.drain();
        let handled = !events.is_empty();
        for event in events {
            tracing::trace!(?event, "app event");
            match event {
                AppEvent::OpenContactModal => {
                    self.header.set_menu_open(false);
                    self.contact.open();
                }
                AppEvent::StartPageLoad => self.loader.begin(),
                AppEvent::Navigate(route) => {
                    // A load started for the page already shown has no route change to end it.
                    if !self.navigate(route, now) && self.loader.remaining(now).is_none() {
                        self.loader.cancel();
                    }
                }
                AppEvent::Back => self.navigate_back(now),
                AppEvent::NavLink(target) => self.handle_nav(target, now),
                AppEvent::OpenPreview(index) => self.preview.open(index),
                AppEvent::OpenExternal(url) => {
                    if let Err(e) = open::that(&url) {
                        self.status.set_error(format!("Could not open link: {}", e), now);
                    }
                }
                AppEvent::ToggleMenu => {
                    self.header.toggle_menu();
                }
                AppEvent::CloseMenu => {
                    self.header.set_menu_open(false);
                }
                AppEvent::ToggleTheme => self.toggle_theme(ctx),
            }
        }
        handled
    }

    /// Menu and footer links.
    pub(crate) fn handle_nav(&mut self, target: NavTarget, now: Instant) {
        self.header.set_menu_open(false);
        match target {
            NavTarget::Anchor(Anchor::Contact) => self.contact.open(),
            NavTarget::Anchor(anchor) => {
                tracing::debug!(anchor = anchor.hash(), "section link");
                if self.navigation.current == Route::Home {
                    self.scroll_to_anchor(anchor);
                } else {
                    self.navigation.pending_anchor = Some(anchor);
                    self.loader.begin();
                    self.navigate(Route::Home, now);
                }
            }
            NavTarget::Route(route) => {
                if route != self.navigation.current {
                    self.loader.begin();
                }
                self.navigate(route, now);
            }
        }
    }

    /// Returns false when `route` was already showing.
    pub(crate) fn navigate(&mut self, route: Route, now: Instant) -> bool {
        let changed = self.navigation.push(route);
        if changed {
            self.on_route_changed(now);
        }
        changed
    }

    pub(crate) fn navigate_back(&mut self, now: Instant) {
        if self.navigation.go_back().is_some() {
            self.on_route_changed(now);
        }
    }

    pub(crate) fn navigate_forward(&mut self, now: Instant) {
        if self.navigation.go_forward().is_some() {
            self.on_route_changed(now);
        }
    }

    /// Everything a page remount resets.
    fn on_route_changed(&mut self, now: Instant) {
        tracing::info!(route = %self.navigation.current, "route changed");
        self.scroll.reset();
        self.header.reset();
        self.preview.close();
        self.sections.clear();
        self.last_offset = 0.0;
        self.scroll_to = Some(0.0);
        self.loader.on_route_change(now);
        self.sync_gallery();
    }

    /// Load the current listing's photos into the lightbox.
    fn sync_gallery(&mut self) {
        let images = match &self.navigation.current {
            Route::ListingDetail(key) => self
                .find_listing(key)
                .map(|listing| {
                    listing
                        .gallery()
                        .iter()
                        .map(|src| self.image_uri(src))
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        };
        if images.as_slice() != self.preview.images() {
            self.preview.set_images(images);
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggle();
        self.theme.apply(ctx);
        self.config.theme.mode = match self.theme {
            Theme::Dark => "dark".to_string(),
            Theme::Light => "light".to_string(),
        };
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "theme not saved");
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = format!("{} · KM&co Realty", self.navigation.current.title());
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn scroll_to_anchor(&mut self, anchor: Anchor) {
        match layout::section_offset(&self.sections, anchor) {
            Some(y) => self.scroll_to = Some(y),
            None => self.navigation.pending_anchor = Some(anchor),
        }
    }

    /// Feed the scroll area's offset into the tracker.
    pub(crate) fn record_scroll_offset(&mut self, ctx: &egui::Context, offset: f32) {
        if (offset - self.last_offset).abs() <= f32::EPSILON {
            return;
        }
        self.last_offset = offset;
        if self.scroll.queue_sample(offset) {
            ctx.request_repaint();
        }
    }

    fn tick(&mut self, ctx: &egui::Context, now: Instant) {
        if let Some(snapshot) = self.scroll.flush_frame() {
            self.header.apply(snapshot);
        }

        if self.navigation.current == Route::Home && !self.sections.is_empty() {
            if let Some(anchor) = self.navigation.take_pending_anchor() {
                self.scroll_to_anchor(anchor);
            }
        }

        self.loader.tick(now);
        if let Some(left) = self.loader.remaining(now) {
            ctx.request_repaint_after(left);
        }

        self.contact.tick(now);
        if self.contact.is_visible() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.status
            .clear_expired_messages(now, Duration::from_secs(layout::MESSAGE_TIMEOUT_SECS));
    }
}

impl eframe::App for Homefront {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_io_results(now);
        self.handle_input(ctx, now);
        self.process_events(ctx, now);
        self.tick(ctx, now);
        self.sync_window_title(ctx);

        self.render_page(ctx);
        self.render_header(ctx);
        self.render_bottom_nav(ctx);
        self.render_menu(ctx);
        self.render_lightbox(ctx);
        self.render_contact_modal(ctx, now);
        self.render_status(ctx);
        self.render_loader(ctx);

        // Views may have queued events while rendering.
        if self.process_events(ctx, now) {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.watcher.stop();
    }
}
