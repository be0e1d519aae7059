//! Slide carousel - the `Slider` block's renderer and state machine.
//!
//! States: no slides renders a fixed placeholder; otherwise the widget
//! shows slide `current` with `0 <= current < N`. Transitions:
//!
//! - `advance`: `(current + 1) % N` - manual "next" or an autoplay tick
//! - `retreat`: `(current + N - 1) % N` - manual "previous"
//! - `jump(j)`: `current = j` for valid `j`; out-of-range requests are
//!   ignored without error
//!
//! Autoplay runs only while enabled with more than one slide. The interval
//! timer is cancelled and restarted when the autoplay configuration
//! changes, and cancelled for good when the instance is disposed. Ticks it
//! accumulates are applied as `advance` transitions at the next host
//! render, so every state mutation happens on the UI thread. Manual
//! navigation deliberately leaves the autoplay phase untouched.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

use super::instances;
use super::interval::IntervalHandle;
use crate::parse;
use crate::props::Props;
use crate::render::RenderInput;
use crate::schema::defaults::slider as slider_d;
use crate::theme;
use crate::tree::{Element, Node, NodeKind};

/// Rendered in place of a slide when the slide list is empty.
pub const EMPTY_PLACEHOLDER: &str = "Add slide content (one per line)";

// =============================================================================
// State
// =============================================================================

struct CarouselState {
    /// Current slide index; always `< slide_count` when slides exist.
    current: usize,
    /// Raw slide-list text; its identity resets `current` when it changes.
    slides_src: String,
    /// Slide count observed at the last render.
    slide_count: usize,
    /// Live autoplay timer plus the interval it was started with.
    autoplay: Option<IntervalHandle>,
    autoplay_ms: u64,
}

thread_local! {
    static CAROUSELS: RefCell<HashMap<usize, CarouselState>> = RefCell::new(HashMap::new());
}

fn with_state<R>(instance: &str, f: impl FnOnce(&mut CarouselState) -> R) -> Option<R> {
    let index = instances::index_of(instance)?;
    CAROUSELS.with(|carousels| carousels.borrow_mut().get_mut(&index).map(f))
}

fn remove_state(index: usize) {
    CAROUSELS.with(|carousels| {
        if let Some(state) = carousels.borrow_mut().remove(&index) {
            if let Some(handle) = state.autoplay {
                handle.cancel();
            }
            debug!(index, "carousel state dropped");
        }
    });
}

// =============================================================================
// Transitions
// =============================================================================

/// Move to the next slide, wrapping at the end.
pub fn advance(instance: &str) {
    with_state(instance, |state| {
        if state.slide_count > 0 {
            state.current = (state.current + 1) % state.slide_count;
        }
    });
}

/// Move to the previous slide, wrapping at the start.
pub fn retreat(instance: &str) {
    with_state(instance, |state| {
        if state.slide_count > 0 {
            state.current = (state.current + state.slide_count - 1) % state.slide_count;
        }
    });
}

/// Jump to a slide by index. Out-of-range targets are ignored.
pub fn jump(instance: &str, target: usize) {
    with_state(instance, |state| {
        if target < state.slide_count {
            state.current = target;
        } else {
            debug!(instance, target, "ignored out-of-range jump");
        }
    });
}

/// Current slide index, if the instance has state.
pub fn current_index(instance: &str) -> Option<usize> {
    with_state(instance, |state| state.current)
}

/// Whether the instance's autoplay timer is live.
pub fn autoplay_running(instance: &str) -> bool {
    with_state(instance, |state| {
        state.autoplay.as_ref().is_some_and(IntervalHandle::is_running)
    })
    .unwrap_or(false)
}

/// Cancel all timers and drop all carousel state (for testing).
pub fn reset_carousels() {
    CAROUSELS.with(|carousels| {
        for (_, state) in carousels.borrow_mut().drain() {
            if let Some(handle) = state.autoplay {
                handle.cancel();
            }
        }
    });
}

// =============================================================================
// Render
// =============================================================================

/// Render the carousel for one host instance, applying any pending
/// autoplay ticks first.
pub fn render(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let slides_src = props.str("slides", slider_d::SLIDES);
    let slides = parse::lines(&slides_src);
    let autoplay_enabled = props.bool("autoplay", slider_d::AUTOPLAY);
    let autoplay_ms = props.u64("autoplaySpeed", slider_d::AUTOPLAY_MS);

    let index = instances::acquire(input.instance);
    let current = CAROUSELS.with(|carousels| {
        let mut carousels = carousels.borrow_mut();
        let state = carousels.entry(index).or_insert_with(|| {
            debug!(instance = input.instance, "carousel state created");
            instances::on_dispose(index, move || remove_state(index));
            CarouselState {
                current: 0,
                slides_src: slides_src.clone(),
                slide_count: 0,
                autoplay: None,
                autoplay_ms: 0,
            }
        });

        // Reset to the first slide when the slide list identity changes.
        if state.slides_src != slides_src {
            state.slides_src = slides_src.clone();
            state.current = 0;
        }
        state.slide_count = slides.len();
        if state.current >= slides.len() {
            state.current = 0;
        }

        // Sync the autoplay timer with the current configuration.
        let want_autoplay = autoplay_enabled && slides.len() > 1;
        let stale =
            state.autoplay.is_some() && (!want_autoplay || state.autoplay_ms != autoplay_ms);
        if stale {
            if let Some(handle) = state.autoplay.take() {
                handle.cancel();
                debug!(instance = input.instance, "autoplay timer cancelled");
            }
        }
        if want_autoplay && state.autoplay.is_none() {
            state.autoplay = Some(IntervalHandle::start(autoplay_ms));
            state.autoplay_ms = autoplay_ms;
            debug!(
                instance = input.instance,
                interval_ms = autoplay_ms,
                "autoplay timer started"
            );
        }

        // Apply ticks the timer accumulated since the last render.
        if let Some(handle) = &state.autoplay {
            let ticks = handle.take_ticks() as usize;
            if ticks > 0 && slides.len() > 1 {
                state.current = (state.current + ticks % slides.len()) % slides.len();
            }
        }

        state.current
    });

    build_tree(&props, &slides, current)
}

fn build_tree(props: &Props<'_>, slides: &[String], current: usize) -> Node {
    let background = props.str("backgroundColor", slider_d::BACKGROUND);
    let show_dots = props.bool("showDots", slider_d::SHOW_DOTS);
    let show_arrows = props.bool("showArrows", slider_d::SHOW_ARROWS);

    let slide_text = match slides.get(current) {
        Some(slide) => slide.clone(),
        None => EMPTY_PLACEHOLDER.to_string(),
    };

    let mut outer = Element::new(NodeKind::Block)
        .style("position", "relative")
        .style("height", props.str("height", slider_d::HEIGHT))
        .style("background-color", background.clone())
        .style("margin", theme::BLOCK_MARGIN)
        .style("border-radius", "8px")
        .style("overflow", "hidden")
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", "center")
        .child(
            Element::new(NodeKind::Block)
                .style("width", "100%")
                .style("height", "100%")
                .style("display", "flex")
                .style("align-items", "center")
                .style("justify-content", "center")
                .style("padding", "40px")
                .style("text-align", "center")
                .style("font-size", "1.5rem")
                .style("font-weight", "bold")
                .style("color", theme::HEADING_COLOR)
                .style(
                    "background",
                    format!(
                        "linear-gradient(135deg, {background} 0%, {} 100%)",
                        theme::PANEL_BORDER
                    ),
                )
                .text(slide_text)
                .into_node(),
        );

    // Navigation only exists when there is something to navigate between.
    if slides.len() > 1 {
        if show_arrows {
            outer = outer
                .child(arrow("‹", "previous", "left"))
                .child(arrow("›", "next", "right"));
        }
        if show_dots {
            outer = outer.child(dots(slides.len(), current));
        }
    }

    outer.into_node()
}

fn arrow(glyph: &str, action: &str, side: &str) -> Node {
    Element::new(NodeKind::Button)
        .attr("data-action", action)
        .style("position", "absolute")
        .style("top", "50%")
        .style("transform", "translateY(-50%)")
        .style(side, "20px")
        .style("background-color", "rgba(0,0,0,0.5)")
        .style("color", "white")
        .style("border", "none")
        .style("border-radius", "50%")
        .style("width", "40px")
        .style("height", "40px")
        .style("cursor", "pointer")
        .style("font-size", "18px")
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", "center")
        .style("z-index", "2")
        .text(glyph)
        .into_node()
}

fn dots(count: usize, current: usize) -> Node {
    Element::new(NodeKind::Block)
        .style("position", "absolute")
        .style("bottom", "20px")
        .style("left", "50%")
        .style("transform", "translateX(-50%)")
        .style("display", "flex")
        .style("gap", "8px")
        .style("z-index", "2")
        .children((0..count).map(|i| {
            let fill = if i == current {
                "white"
            } else {
                "rgba(255,255,255,0.5)"
            };
            Element::new(NodeKind::Button)
                .attr("data-action", "jump")
                .attr("data-index", i.to_string())
                .style("width", "12px")
                .style("height", "12px")
                .style("border-radius", "50%")
                .style("background-color", fill)
                .style("cursor", "pointer")
                .style("transition", "background-color 0.3s")
                .into_node()
        }))
        .into_node()
}

// =============================================================================
// Tests
// =============================================================================
