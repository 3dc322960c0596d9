//! Presentation contract: how validation state reaches the user.
//!
//! The engine never paints anything. It drives a [`Presenter`] through a
//! handful of lifecycle calls and hands it the [`FieldState`] to render;
//! everything visual (error styling, the floating assist bubble, notices,
//! alerts, scrolling) lives behind the trait. [`PresenterOptions`] carries
//! the knobs a presenter is expected to honor, with the defaults hosts
//! have historically relied on.

use std::time::Duration;

use crate::field::Field;
use crate::state::FieldState;

/// RGB color carried by presenter styling options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Styling for the floating assist bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistStyle {
    /// Bubble background. Default: `#fee`.
    pub background: Rgb,
    /// Bubble border. Default: `#fcc`.
    pub border: Rgb,
    /// Inner padding, in presenter units. Default: 5.
    pub padding: u16,
}

impl Default for AssistStyle {
    fn default() -> Self {
        Self {
            background: Rgb::new(0xff, 0xee, 0xee),
            border: Rgb::new(0xff, 0xcc, 0xcc),
            padding: 5,
        }
    }
}

/// Options a presenter is expected to honor.
///
/// The engine itself only consults `use_assist` (folded into the
/// `use_assist` argument of [`Presenter::update`]); the rest flows
/// straight through to the presenter implementation.
///
/// # Example
///
/// ```
/// use formwork::presenter::PresenterOptions;
///
/// let options = PresenterOptions::default()
///     .with_use_assist(true)
///     .with_alert_text("Please fix the highlighted fields");
/// assert!(options.use_assist);
/// ```
#[derive(Debug, Clone)]
pub struct PresenterOptions {
    /// Marker applied to invalid controls. Default: `assist-error`.
    pub error_class: String,
    /// Marker for the label line of an assist bubble. Default:
    /// `assist-label`.
    pub assist_label_class: String,
    /// Marker for the message lines of an assist bubble. Default:
    /// `assist-msg`.
    pub assist_msg_class: String,
    /// Assist bubble styling.
    pub assist_style: AssistStyle,
    /// Gap between a control and its assist bubble. Default: 3.
    pub assist_offset: u16,
    /// Show/hide animation length. Default: 200ms.
    pub duration: Duration,
    /// Out-of-band alert shown when a gated submit fails.
    pub alert_text: String,
    /// Whether live updates may show the assist bubble. Default: false.
    pub use_assist: bool,
    /// Whether [`alert_and_scroll_to_error`](Presenter::alert_and_scroll_to_error)
    /// should scroll to the field, or only alert. Default: true.
    pub scroll_to_error_on_submit: bool,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            error_class: "assist-error".into(),
            assist_label_class: "assist-label".into(),
            assist_msg_class: "assist-msg".into(),
            assist_style: AssistStyle::default(),
            assist_offset: 3,
            duration: Duration::from_millis(200),
            alert_text: "Some of your input needs attention".into(),
            use_assist: false,
            scroll_to_error_on_submit: true,
        }
    }
}

impl PresenterOptions {
    /// Creates options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the invalid-control marker.
    pub fn with_error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Sets the assist label marker.
    pub fn with_assist_label_class(mut self, class: impl Into<String>) -> Self {
        self.assist_label_class = class.into();
        self
    }

    /// Sets the assist message marker.
    pub fn with_assist_msg_class(mut self, class: impl Into<String>) -> Self {
        self.assist_msg_class = class.into();
        self
    }

    /// Sets the assist bubble styling.
    pub fn with_assist_style(mut self, style: AssistStyle) -> Self {
        self.assist_style = style;
        self
    }

    /// Sets the control-to-bubble gap.
    pub fn with_assist_offset(mut self, offset: u16) -> Self {
        self.assist_offset = offset;
        self
    }

    /// Sets the show/hide animation length.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the failed-submit alert text.
    pub fn with_alert_text(mut self, text: impl Into<String>) -> Self {
        self.alert_text = text.into();
        self
    }

    /// Allows or forbids assist bubbles on live updates.
    pub fn with_use_assist(mut self, use_assist: bool) -> Self {
        self.use_assist = use_assist;
        self
    }

    /// Enables or disables the failed-submit alert and scroll.
    pub fn with_scroll_to_error_on_submit(mut self, scroll: bool) -> Self {
        self.scroll_to_error_on_submit = scroll;
        self
    }
}

/// Receives validation lifecycle calls from the engine.
///
/// [`update`](Presenter::update) is the one required method: it runs after
/// every presenter-visible validation of a field, with that field's state.
/// The remaining methods default to no-ops so headless presenters stay
/// small. The engine never reads anything back out of a presenter; the
/// call order is the whole contract.
pub trait Presenter {
    /// A field was registered at bind time. A DOM presenter would wrap the
    /// control in its validation container here.
    fn attach(&mut self, _field: &dyn Field) {}

    /// A field was just validated. `use_assist` tells the presenter
    /// whether the floating bubble may show for this update; submit-time
    /// and bind-time passes always run with it disabled.
    fn update(&mut self, field: &dyn Field, state: &FieldState, use_assist: bool);

    /// The field lost focus; any visible assist bubble goes away.
    fn dismiss_assist(&mut self, _field: &dyn Field) {}

    /// The field gained focus; any out-of-band notice for it goes away.
    fn clear_notice(&mut self, _field: &dyn Field) {}

    /// A gated submit failed; alert and bring the first invalid field
    /// into view.
    fn alert_and_scroll_to_error(&mut self, _first_invalid: &dyn Field) {}
}

/// Presenter that does nothing. For hosts that only consume boolean
/// outcomes and read [`FieldState`] themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn update(&mut self, _field: &dyn Field, _state: &FieldState, _use_assist: bool) {}
}
