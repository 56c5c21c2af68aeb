//! Class names and the shared stylesheet.

use crate::dom::Dom;

/// Id of the `<style>` element installed once per document.
pub const STYLE_ID: &str = "tscroll";

/// Marker on outer containers that carry a scrollbar.
pub const OUTER_CLASS: &str = "tscroll";
/// The track ("box").
pub const TRACK_CLASS: &str = "tscroll-box";
/// The thin line drawn down the middle of the track.
pub const ZIP_CLASS: &str = "tscroll-zip";
pub const KNOB_CLASS: &str = "tscroll-knob";
/// Suppresses text selection and native drag.
pub const NO_SELECT_CLASS: &str = "tscroll-ns";
/// Knob highlight while a drag is in progress.
pub const ACTIVE_CLASS: &str = "tscroll-active";

pub const STYLESHEET: &str = concat!(
    ".tscroll-ns, .tscroll-box, .tscroll-zip, .tscroll-knob {",
    "-webkit-user-select:none; -moz-user-select:none; -ms-user-select:none;",
    "user-select:none; -webkit-user-drag:none; user-drag:none;",
    "-webkit-tap-highlight-color:transparent; -webkit-touch-callout:none;",
    "}",
    ".tscroll-box {",
    "position:absolute; top:0; bottom:0;",
    "width:10px; background:#d8d8d8; z-index:1;",
    "}",
    ".tscroll-zip {",
    "position:absolute; top:0; bottom:0; right:4px;",
    "width:2px; background:#aaa; z-index:2;",
    "}",
    ".tscroll-knob {",
    "position:absolute; top:0; right:0; width:10px;",
    "background-color:#aaa;",
    "background-image:linear-gradient(to bottom,#ddd,#999);",
    "border:1px solid #888; border-radius:2px;",
    "z-index:3; cursor:pointer;",
    "}",
    ".tscroll-knob:hover, .tscroll-knob.tscroll-active {",
    "background-color:#999;",
    "background-image:linear-gradient(to bottom,#ccc,#888);",
    "border-color:#888; cursor:pointer;",
    "}",
);

/// Installs [`STYLESHEET`] at most once per document.
///
/// Presence is checked against the document itself, so several registries
/// (or controllers) sharing one document still produce a single node.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleRegistry;

impl StyleRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Install the stylesheet if the document lacks it.
    /// Returns true if a node was inserted.
    pub fn ensure<D: Dom>(&self, dom: &mut D) -> bool {
        if dom.has_stylesheet(STYLE_ID) {
            return false;
        }
        log::debug!("[tscroll] installing stylesheet #{STYLE_ID}");
        dom.insert_stylesheet(STYLE_ID, STYLESHEET);
        true
    }
}
