//! A headless host that plays the role of a presentation binding.

use std::sync::Arc;

use tessera_range::{
    DocumentListeners, EditOutcome, KeyOutcome, PointerEvent, RangeDomain, RangeHandle,
    RangeSlider, Thumb, TrackRect, provide_range,
    view::{self, LabelView, ThumbView, TrackView},
};
use tracing::{debug, info};

/// Input delivered to the host, in the shape a windowing layer reports it.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// Mouse button pressed on a thumb.
    Press(Thumb),
    /// A thumb received keyboard focus.
    Focus(Thumb),
    /// A key pressed while a thumb is focused.
    Key(Thumb, &'static str),
    /// Text typed into a value label and confirmed.
    Edit(Thumb, &'static str),
    /// An event observed on the whole document.
    Document(PointerEvent),
}

/// Hosts one slider on a track of fixed geometry.
pub struct Host<D: RangeDomain> {
    name: &'static str,
    handle: RangeHandle<D>,
    document: Arc<DocumentListeners>,
    track: TrackRect,
}

impl<D: RangeDomain> Host<D> {
    pub fn new(
        name: &'static str,
        slider: RangeSlider<D>,
        document: Arc<DocumentListeners>,
        track: TrackRect,
    ) -> Self {
        Self {
            name,
            handle: slider.into_handle(),
            document,
            track,
        }
    }

    pub fn handle(&self) -> &RangeHandle<D> {
        &self.handle
    }

    /// Routes one event to the slider.
    ///
    /// Document events only reach the slider while it holds document
    /// listeners, as they would in a browser.
    pub fn dispatch(&self, event: HostEvent) {
        let mut slider = self.handle.lock();
        match event {
            HostEvent::Press(thumb) => slider.on_pointer_start(thumb),
            HostEvent::Focus(thumb) => slider.on_focus(thumb),
            HostEvent::Key(thumb, key) => {
                if slider.on_key_down(thumb, key) == KeyOutcome::Ignored {
                    debug!(host = self.name, key, "key passed through");
                }
            }
            HostEvent::Edit(thumb, text) => {
                if slider.on_direct_edit(thumb, text) == EditOutcome::Rejected {
                    info!(host = self.name, text, "edit rejected");
                }
            }
            HostEvent::Document(event) => {
                if self.document.is_listening(event.document_event()) {
                    slider.on_pointer_move(&event, self.track);
                } else {
                    debug!(host = self.name, event = event.document_event().name(), "no listener");
                }
            }
        }
    }

    /// Renders the slider as text, reading every control from the provided
    /// slider the way nested components would.
    pub fn render(&self) -> String {
        provide_range(self.handle.clone(), || {
            let track = view::track_view::<D>();
            let thumbs = Thumb::BOTH.map(view::thumb_view::<D>);
            let labels = Thumb::BOTH.map(view::label_view::<D>);
            draw(self.name, &track, &thumbs, &labels)
        })
    }
}

const WIDTH: usize = 40;

fn column(percentage: f64) -> usize {
    ((percentage / 100.0 * (WIDTH - 1) as f64).round() as usize).min(WIDTH - 1)
}

fn draw(
    name: &str,
    track: &TrackView,
    thumbs: &[ThumbView; 2],
    labels: &[LabelView; 2],
) -> String {
    let start = column(track.min_percentage);
    let end = column(track.max_percentage);
    let mut line: Vec<char> = (0..WIDTH)
        .map(|col| if (start..=end).contains(&col) { '=' } else { '-' })
        .collect();
    for thumb in thumbs {
        line[column(thumb.position)] = if thumb.is_active { '@' } else { 'O' };
    }

    let mut out = format!("{name}\n");
    out.push_str(&format!(
        "  {} [{}] {}\n",
        labels[0].display_value,
        line.into_iter().collect::<String>(),
        labels[1].display_value
    ));
    for thumb in thumbs {
        out.push_str(&format!(
            "  {:<28} {}\n",
            thumb.semantics.value_text, thumb.class_name
        ));
    }
    out
}
