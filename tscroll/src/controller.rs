//! Widget controller: attach, refresh and dispatch.
//!
//! Per-element state lives in explicit maps keyed by element handle: one
//! from outer container to instance, and one from knob to outer container.
//! Nothing is stored on the nodes themselves.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::dom::{Dom, Target};
use crate::error::AttachError;
use crate::geometry::Geometry;
use crate::gesture::{self, EventResult, ScrollEvent};
use crate::options::{Options, PositionKey, ScrollConfig};
use crate::state::{ElementRefs, WidgetState};
use crate::style::{
    KNOB_CLASS, NO_SELECT_CLASS, OUTER_CLASS, StyleRegistry, TRACK_CLASS, ZIP_CLASS,
};

#[derive(Debug, Clone)]
struct Instance<N> {
    refs: ElementRefs<N>,
    options: Options,
    state: WidgetState,
}

/// Owns every scrollbar attached through it.
#[derive(Debug)]
pub struct Scrollbars<N> {
    config: ScrollConfig,
    styles: StyleRegistry,
    /// outer -> instance
    instances: HashMap<N, Instance<N>>,
    /// knob -> outer
    knobs: HashMap<N, N>,
}

impl<N: Clone + Eq + Hash + Debug> Default for Scrollbars<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash + Debug> Scrollbars<N> {
    pub fn new() -> Self {
        Self::with_config(ScrollConfig::default())
    }

    pub fn with_config(config: ScrollConfig) -> Self {
        Self {
            config,
            styles: StyleRegistry::new(),
            instances: HashMap::new(),
            knobs: HashMap::new(),
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Attach / refresh
    // -------------------------------------------------------------------------

    /// Attach a scrollbar to `outer`, scrolling `inner`.
    ///
    /// Returns false, without touching the document, unless both targets
    /// resolve to exactly one element. Attaching to an already attached
    /// outer element replaces the previous scrollbar.
    pub fn attach<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        outer: impl Into<Target<N>>,
        inner: impl Into<Target<N>>,
        options: Options,
    ) -> bool {
        match self.try_attach(dom, outer, inner, options) {
            Ok(_) => true,
            Err(e) => {
                log::debug!("[tscroll] attach skipped: {e}");
                false
            }
        }
    }

    /// Like [`attach`](Self::attach), reporting which precondition failed.
    /// On success returns the outer element.
    pub fn try_attach<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        outer: impl Into<Target<N>>,
        inner: impl Into<Target<N>>,
        options: Options,
    ) -> Result<N, AttachError> {
        let outer = single(
            outer.into().resolve(dom),
            AttachError::OuterNotFound,
            AttachError::OuterAmbiguous,
        )?;
        let content = single(
            inner.into().resolve(dom),
            AttachError::InnerNotFound,
            AttachError::InnerAmbiguous,
        )?;

        if dom.has_class(&outer, OUTER_CLASS) || self.instances.contains_key(&outer) {
            log::debug!("[tscroll] re-attaching {outer:?}");
            self.detach(dom, &outer);
        }

        self.styles.ensure(dom);

        let refs = build_markup(dom, outer.clone(), content, options.position);
        dom.add_class(&outer, OUTER_CLASS);

        let mut instance = Instance {
            refs,
            options,
            state: WidgetState::default(),
        };
        let geometry = resize(dom, &mut instance);
        log::debug!(
            "[tscroll] attached {outer:?} ({}): ratio {}, max scroll {}",
            options.position,
            geometry.height_ratio,
            geometry.max_scroll_px
        );

        // Reconcile with any scroll offset the container already had.
        gesture::drag_move(dom, &instance.refs, &mut instance.state, 0.0);

        self.knobs.insert(instance.refs.knob.clone(), outer.clone());
        self.instances.insert(outer.clone(), instance);
        Ok(outer)
    }

    /// Re-measure an attached scrollbar, e.g. after a resize.
    /// Does nothing for elements that were never attached.
    pub fn refresh<D: Dom<Node = N>>(&mut self, dom: &mut D, outer: &N) {
        if !self.ensure_live(dom, outer) {
            return;
        }
        let Some(instance) = self.instances.get_mut(outer) else {
            return;
        };
        let geometry = resize(dom, instance);
        log::debug!(
            "[tscroll] refreshed {outer:?}: ratio {}, visible {}",
            geometry.height_ratio,
            geometry.visible
        );
        gesture::drag_move(dom, &instance.refs, &mut instance.state, 0.0);
    }

    /// Unbind the scrollbar on `outer` and remove its track.
    fn detach<D: Dom<Node = N>>(&mut self, dom: &mut D, outer: &N) {
        if let Some(previous) = self.instances.remove(outer) {
            self.knobs.remove(&previous.refs.knob);
        }

        // Tracks of other live instances (nested scrollbars inside the
        // content) must survive.
        let keep: HashSet<&N> = self.instances.values().map(|i| &i.refs.track).collect();
        for track in dom.find_by_class(outer, TRACK_CLASS) {
            if !keep.contains(&track) {
                dom.remove(&track);
            }
        }
    }

    /// Drop state for instances whose outer element or knob was removed.
    /// Detached elements keep their scrollbar.
    pub fn prune<D: Dom<Node = N>>(&mut self, dom: &D) {
        let before = self.instances.len();
        self.instances.retain(|_, instance| is_live(dom, &instance.refs));
        if self.instances.len() != before {
            log::debug!(
                "[tscroll] pruned {} stale scrollbar(s)",
                before - self.instances.len()
            );
            let instances = &self.instances;
            self.knobs.retain(|_, outer| instances.contains_key(outer));
        }
    }

    /// Whether `outer` has a live instance, dropping it if its outer element
    /// or knob is gone. A knob goes away when another controller re-attaches
    /// to the same element.
    fn ensure_live<D: Dom<Node = N>>(&mut self, dom: &D, outer: &N) -> bool {
        let Some(instance) = self.instances.get(outer) else {
            return false;
        };
        if is_live(dom, &instance.refs) {
            return true;
        }
        log::debug!("[tscroll] scrollbar on {outer:?} was removed, dropping it");
        self.knobs.remove(&instance.refs.knob);
        self.instances.remove(outer);
        false
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Route a signal to the scrollbar bound to `target`.
    ///
    /// Wheel signals target the outer container, everything else the knob.
    /// Unbound targets are ignored without touching the document.
    pub fn dispatch<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        target: &N,
        event: ScrollEvent,
    ) -> EventResult {
        let outer = if event.targets_outer() {
            target.clone()
        } else {
            match self.knobs.get(target) {
                Some(outer) => outer.clone(),
                None => {
                    log::trace!("[tscroll] {event:?} on unbound {target:?}");
                    return EventResult::Ignored;
                }
            }
        };

        if !self.ensure_live(dom, &outer) {
            log::trace!("[tscroll] {event:?} on unbound {target:?}");
            return EventResult::Ignored;
        }
        let Some(instance) = self.instances.get_mut(&outer) else {
            return EventResult::Ignored;
        };
        gesture::handle(dom, &instance.refs, &mut instance.state, event, &self.config)
    }

    pub fn pointer_down<D: Dom<Node = N>>(&mut self, dom: &mut D, knob: &N) -> EventResult {
        self.dispatch(dom, knob, ScrollEvent::PointerDown)
    }

    pub fn drag_start<D: Dom<Node = N>>(&mut self, dom: &mut D, knob: &N) -> EventResult {
        self.dispatch(dom, knob, ScrollEvent::DragStart)
    }

    pub fn drag_move<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        knob: &N,
        px_delta_y: f64,
    ) -> EventResult {
        self.dispatch(dom, knob, ScrollEvent::DragMove { px_delta_y })
    }

    pub fn drag_end<D: Dom<Node = N>>(&mut self, dom: &mut D, knob: &N) -> EventResult {
        self.dispatch(dom, knob, ScrollEvent::DragEnd)
    }

    pub fn wheel<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        outer: &N,
        delta_units: f64,
    ) -> EventResult {
        self.dispatch(dom, outer, ScrollEvent::Wheel { delta_units })
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    pub fn is_attached(&self, outer: &N) -> bool {
        self.instances.contains_key(outer)
    }

    pub fn state(&self, outer: &N) -> Option<&WidgetState> {
        self.instances.get(outer).map(|i| &i.state)
    }

    pub fn refs(&self, outer: &N) -> Option<&ElementRefs<N>> {
        self.instances.get(outer).map(|i| &i.refs)
    }

    pub fn options(&self, outer: &N) -> Option<Options> {
        self.instances.get(outer).map(|i| i.options)
    }

    /// The outer element a knob is bound to.
    pub fn outer_for_knob(&self, knob: &N) -> Option<&N> {
        self.knobs.get(knob)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

fn is_live<D: Dom>(dom: &D, refs: &ElementRefs<D::Node>) -> bool {
    dom.exists(&refs.outer) && dom.exists(&refs.knob)
}

fn single<N>(
    mut nodes: Vec<N>,
    missing: AttachError,
    ambiguous: fn(usize) -> AttachError,
) -> Result<N, AttachError> {
    match nodes.len() {
        0 => Err(missing),
        1 => Ok(nodes.remove(0)),
        n => Err(ambiguous(n)),
    }
}

/// Create track, zip and knob and append the track to `outer`.
fn build_markup<D: Dom>(
    dom: &mut D,
    outer: D::Node,
    content: D::Node,
    position: PositionKey,
) -> ElementRefs<D::Node> {
    let track = dom.create_element("div");
    let zip = dom.create_element("div");
    let knob = dom.create_element("div");

    for (node, class) in [(&track, TRACK_CLASS), (&zip, ZIP_CLASS), (&knob, KNOB_CLASS)] {
        dom.add_class(node, class);
        dom.add_class(node, NO_SELECT_CLASS);
    }
    dom.append_child(&track, &zip);
    dom.append_child(&track, &knob);

    dom.set_px(&track, position.property(), 0.0);
    dom.append_child(&outer, &track);

    ElementRefs {
        outer,
        content,
        track,
        zip,
        knob,
    }
}

/// Measure the pair and show, hide or resize the track and knob.
fn resize<D: Dom>(dom: &mut D, instance: &mut Instance<D::Node>) -> Geometry {
    let refs = &instance.refs;
    let scroll_top = dom.scroll_top(&refs.outer);
    let geometry = Geometry::compute(
        dom.height(&refs.outer),
        dom.height(&refs.content),
        scroll_top,
    );

    if geometry.visible {
        dom.set_px(&refs.knob, "top", geometry.knob_top_px);
        dom.set_px(&refs.track, "top", scroll_top);
        dom.set_px(&refs.track, "bottom", -scroll_top);
        dom.set_visible(&refs.track, true);
        dom.set_height(&refs.knob, geometry.knob_height_px);
        dom.set_visible(&refs.knob, true);
    } else {
        dom.set_visible(&refs.track, false);
    }

    instance.state.apply_geometry(&geometry);
    geometry
}
