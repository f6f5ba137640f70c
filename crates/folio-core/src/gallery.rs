//! Gallery controller: filter → render → modal → navigate → close.
//!
//! The controller never touches the page. Every visible change is pushed to
//! an effect list that the host applies, and every asynchronous completion
//! (exit animation finished, image settled, frame tick) comes back in
//! through a method. Image fetches go through an [`ImageLoader`] so the
//! cache can hold whatever handle the host uses.

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

use crate::catalog::{Catalog, GalleryItem, ItemId};
use crate::constants::{ALL_FILTER, CACHED_SWAP_DELAY_MS, CARD_TILT_DIVISOR, INITIAL_PRELOAD_COUNT};
use crate::tween::StyleProps;

/// Hover tilt for a pointer at `local` inside a card of `size`: the card
/// leans away from the pointer around its centre.
pub fn card_tilt(local: Vec2, size: Vec2) -> StyleProps {
    let centre = size / 2.0;
    StyleProps::default().tilt(
        (local.y - centre.y) / CARD_TILT_DIVISOR,
        (centre.x - local.x) / CARD_TILT_DIVISOR,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Starts a full-resolution fetch. Completion is reported back through
/// [`GalleryController::image_settled`].
pub trait ImageLoader {
    type Handle;
    fn load(&mut self, id: ItemId, url: &str) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
struct ImageSlot<H> {
    handle: H,
    status: ImageStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requested {
    /// A fetch was issued by this call.
    Started,
    /// The handle already existed; its current status.
    Cached(ImageStatus),
}

/// Append-only map of item id → image handle for the page session.
#[derive(Debug)]
pub struct ImageCache<H> {
    slots: FnvHashMap<ItemId, ImageSlot<H>>,
    loads: usize,
    hits: usize,
}

impl<H> Default for ImageCache<H> {
    fn default() -> Self {
        Self {
            slots: FnvHashMap::default(),
            loads: 0,
            hits: 0,
        }
    }
}

impl<H> ImageCache<H> {
    /// Foreground request: counts a hit when the handle is reused.
    pub fn request<L>(&mut self, id: ItemId, url: &str, loader: &mut L) -> Requested
    where
        L: ImageLoader<Handle = H>,
    {
        if let Some(slot) = self.slots.get(&id) {
            self.hits += 1;
            return Requested::Cached(slot.status);
        }
        self.start(id, url, loader);
        Requested::Started
    }

    /// Background request: fetch only if nothing is cached yet.
    pub fn preload<L>(&mut self, id: ItemId, url: &str, loader: &mut L) -> bool
    where
        L: ImageLoader<Handle = H>,
    {
        if self.slots.contains_key(&id) {
            return false;
        }
        self.start(id, url, loader);
        true
    }

    fn start<L>(&mut self, id: ItemId, url: &str, loader: &mut L)
    where
        L: ImageLoader<Handle = H>,
    {
        let handle = loader.load(id, url);
        self.loads += 1;
        self.slots.insert(
            id,
            ImageSlot {
                handle,
                status: ImageStatus::Loading,
            },
        );
    }

    /// Record a load completion. Returns false for ids never requested.
    pub fn settle(&mut self, id: ItemId, ok: bool) -> bool {
        match self.slots.get_mut(&id) {
            Some(slot) => {
                slot.status = if ok {
                    ImageStatus::Ready
                } else {
                    ImageStatus::Failed
                };
                true
            }
            None => false,
        }
    }

    pub fn status(&self, id: ItemId) -> Option<ImageStatus> {
        self.slots.get(&id).map(|s| s.status)
    }

    pub fn handle(&self, id: ItemId) -> Option<&H> {
        self.slots.get(&id).map(|s| &s.handle)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fetches issued so far.
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Foreground requests served from an existing handle.
    pub fn hits(&self) -> usize {
        self.hits
    }
}

/// Page changes the host must apply, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryEffect {
    /// Animate the cards currently in the grid out, then call
    /// `exit_finished(generation)`.
    ExitCards { generation: u64 },
    /// Clear the grid and render these catalog indices with a staggered entrance.
    RenderCards { generation: u64, indices: Vec<usize> },
    /// Clear the grid and show the "no items" placeholder.
    RenderEmpty { generation: u64 },
    /// Fill the modal for `index` with its thumbnail in the loading state,
    /// show it and lock page scroll.
    ShowModal {
        index: usize,
        transition: Option<Direction>,
    },
    /// Swap the modal thumbnail for the full image and clear loading.
    SwapFullImage { index: usize },
    /// Keep the thumbnail, clear loading.
    ClearLoading { index: usize },
    /// Hide the modal and unlock page scroll.
    HideModal,
}

#[derive(Clone, Copy, Debug)]
struct PendingSwap {
    index: usize,
    due_ms: f64,
}

pub struct GalleryController<H> {
    catalog: Catalog,
    active_filter: String,
    visible: Vec<usize>,
    modal_enabled: bool,
    modal_open: bool,
    focused: usize,
    cache: ImageCache<H>,
    generation: u64,
    cards_on_screen: bool,
    awaiting_exit: bool,
    pending_swap: Option<PendingSwap>,
}

impl<H> GalleryController<H> {
    pub fn new(catalog: Catalog) -> Self {
        let visible = catalog.filter(ALL_FILTER);
        Self {
            catalog,
            active_filter: ALL_FILTER.to_string(),
            visible,
            modal_enabled: true,
            modal_open: false,
            focused: 0,
            cache: ImageCache::default(),
            generation: 0,
            cards_on_screen: false,
            awaiting_exit: false,
            pending_swap: None,
        }
    }

    /// A page without modal markup: cards render and filter, but opening
    /// does nothing and keys are never consumed.
    pub fn without_modal(mut self) -> Self {
        self.modal_enabled = false;
        self
    }

    pub fn has_modal(&self) -> bool {
        self.modal_enabled
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cache(&self) -> &ImageCache<H> {
        &self.cache
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &GalleryItem> + '_ {
        self.visible.iter().filter_map(|&i| self.catalog.get(i))
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Full-catalog index shown in the modal, while it is open.
    pub fn focused_index(&self) -> Option<usize> {
        self.modal_open.then_some(self.focused)
    }

    pub fn focused_item(&self) -> Option<&GalleryItem> {
        self.focused_index().and_then(|i| self.catalog.get(i))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switch the active filter. Cards on screen leave first; the new set is
    /// rendered once the matching `exit_finished` arrives.
    pub fn set_filter<L>(&mut self, category: &str, loader: &mut L, out: &mut Vec<GalleryEffect>)
    where
        L: ImageLoader<Handle = H>,
    {
        self.active_filter = category.to_string();
        self.visible = self.catalog.filter(category);
        self.generation += 1;
        log::info!(
            "[gallery] filter={} visible={} gen={}",
            self.active_filter,
            self.visible.len(),
            self.generation
        );
        if self.cards_on_screen {
            self.awaiting_exit = true;
            out.push(GalleryEffect::ExitCards {
                generation: self.generation,
            });
        } else {
            self.render(loader, out);
        }
    }

    /// Exit animation for `generation` completed. Stale generations are ignored.
    pub fn exit_finished<L>(&mut self, generation: u64, loader: &mut L, out: &mut Vec<GalleryEffect>)
    where
        L: ImageLoader<Handle = H>,
    {
        if generation != self.generation || !self.awaiting_exit {
            log::debug!(
                "[gallery] ignoring exit for gen {} (current {})",
                generation,
                self.generation
            );
            return;
        }
        self.awaiting_exit = false;
        self.render(loader, out);
    }

    fn render<L>(&mut self, loader: &mut L, out: &mut Vec<GalleryEffect>)
    where
        L: ImageLoader<Handle = H>,
    {
        let generation = self.generation;
        if self.visible.is_empty() {
            self.cards_on_screen = false;
            out.push(GalleryEffect::RenderEmpty { generation });
            return;
        }
        self.cards_on_screen = true;
        out.push(GalleryEffect::RenderCards {
            generation,
            indices: self.visible.clone(),
        });
        for &i in self.visible.iter().take(INITIAL_PRELOAD_COUNT) {
            if let Some(item) = self.catalog.get(i) {
                self.cache.preload(item.id, &item.image, loader);
            }
        }
    }

    /// Open the modal on `id`. Unknown ids are ignored and emit nothing.
    pub fn open_modal<L>(
        &mut self,
        id: ItemId,
        now_ms: f64,
        loader: &mut L,
        out: &mut Vec<GalleryEffect>,
    ) -> bool
    where
        L: ImageLoader<Handle = H>,
    {
        if !self.modal_enabled {
            log::debug!("[gallery] open_modal: no modal on page, ignoring {}", id);
            return false;
        }
        let Some(index) = self.catalog.index_of(id) else {
            log::debug!("[gallery] open_modal: unknown id {}", id);
            return false;
        };
        self.show(index, None, now_ms, loader, out);
        true
    }

    fn show<L>(
        &mut self,
        index: usize,
        transition: Option<Direction>,
        now_ms: f64,
        loader: &mut L,
        out: &mut Vec<GalleryEffect>,
    ) where
        L: ImageLoader<Handle = H>,
    {
        let Some(item) = self.catalog.get(index) else {
            return;
        };
        self.modal_open = true;
        self.focused = index;
        self.pending_swap = None;
        out.push(GalleryEffect::ShowModal { index, transition });

        match self.cache.request(item.id, &item.image, loader) {
            Requested::Started | Requested::Cached(ImageStatus::Loading) => {}
            Requested::Cached(ImageStatus::Ready) => {
                self.pending_swap = Some(PendingSwap {
                    index,
                    due_ms: now_ms + CACHED_SWAP_DELAY_MS,
                });
            }
            Requested::Cached(ImageStatus::Failed) => {
                out.push(GalleryEffect::ClearLoading { index });
            }
        }

        let neighbours: SmallVec<[usize; 2]> =
            SmallVec::from_buf([self.catalog.next_index(index), self.catalog.prev_index(index)]);
        for n in neighbours {
            if n == index {
                continue;
            }
            if let Some(item) = self.catalog.get(n) {
                self.cache.preload(item.id, &item.image, loader);
            }
        }
    }

    /// Step through the full catalog with wraparound. The active filter does
    /// not constrain navigation once the modal is open.
    pub fn navigate_modal<L>(
        &mut self,
        direction: Direction,
        now_ms: f64,
        loader: &mut L,
        out: &mut Vec<GalleryEffect>,
    ) -> bool
    where
        L: ImageLoader<Handle = H>,
    {
        if !self.modal_open || self.catalog.is_empty() {
            return false;
        }
        let next = match direction {
            Direction::Next => self.catalog.next_index(self.focused),
            Direction::Prev => self.catalog.prev_index(self.focused),
        };
        self.show(next, Some(direction), now_ms, loader, out);
        true
    }

    /// Hide the modal. A no-op when already closed.
    pub fn close_modal(&mut self, out: &mut Vec<GalleryEffect>) -> bool {
        if !self.modal_open {
            return false;
        }
        self.modal_open = false;
        self.pending_swap = None;
        out.push(GalleryEffect::HideModal);
        true
    }

    /// Keyboard bindings, live only while the modal is open.
    pub fn handle_key<L>(
        &mut self,
        key: &str,
        now_ms: f64,
        loader: &mut L,
        out: &mut Vec<GalleryEffect>,
    ) -> bool
    where
        L: ImageLoader<Handle = H>,
    {
        if !self.modal_open {
            return false;
        }
        match key {
            "Escape" => self.close_modal(out),
            "ArrowLeft" => self.navigate_modal(Direction::Prev, now_ms, loader, out),
            "ArrowRight" => self.navigate_modal(Direction::Next, now_ms, loader, out),
            _ => false,
        }
    }

    /// A full-image fetch finished. The cache is always updated; the modal
    /// only changes if the item is still the focused one.
    pub fn image_settled(&mut self, id: ItemId, ok: bool, out: &mut Vec<GalleryEffect>) {
        if !self.cache.settle(id, ok) {
            return;
        }
        if !ok {
            if let Some(item) = self.catalog.by_id(id) {
                log::warn!("[gallery] failed to load image: {}", item.image);
            }
        }
        let Some(index) = self.focused_index() else {
            return;
        };
        if self.catalog.get(index).map(|i| i.id) != Some(id) {
            return;
        }
        if ok {
            out.push(GalleryEffect::SwapFullImage { index });
        } else {
            out.push(GalleryEffect::ClearLoading { index });
        }
    }

    /// Frame tick: fires the delayed swap for cached images.
    pub fn tick(&mut self, now_ms: f64, out: &mut Vec<GalleryEffect>) {
        let Some(swap) = self.pending_swap else {
            return;
        };
        if now_ms < swap.due_ms {
            return;
        }
        self.pending_swap = None;
        if self.focused_index() == Some(swap.index) {
            out.push(GalleryEffect::SwapFullImage { index: swap.index });
        }
    }
}
