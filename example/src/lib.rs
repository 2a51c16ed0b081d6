mod host;

use tessera_range::{
    ContinuousRangeArgsBuilder, DocumentListeners, FixedRangeArgsBuilder, PointerEvent,
    RangeError, RangeSlider, RangeValues, Thumb, TrackRect,
};
use tracing::info;

use crate::host::{Host, HostEvent};

/// Price tiers offered by the fixed slider.
const PRICE_TIERS: [f64; 6] = [1.99, 5.99, 10.99, 30.99, 50.99, 70.99];

const TRACK: TrackRect = TrackRect::new(40.0, 400.0);

/// Drives a continuous and a fixed slider through a scripted session.
pub fn run() -> Result<(), RangeError> {
    continuous_session()?;
    fixed_session()
}

fn continuous_session() -> Result<(), RangeError> {
    let document = DocumentListeners::shared();
    let args = ContinuousRangeArgsBuilder::default()
        .lo(1.0)
        .hi(100.0)
        .on_change(|values: RangeValues| info!(min = values.min, max = values.max, "range changed"))
        .document(document.clone())
        .build()?;
    let host = Host::new("Normal range", RangeSlider::continuous(args)?, document, TRACK);
    println!("{}", host.render());

    let script = [
        HostEvent::Press(Thumb::Min),
        HostEvent::Document(PointerEvent::mouse_move(120.0)),
        HostEvent::Document(PointerEvent::mouse_move(520.0)),
        HostEvent::Document(PointerEvent::MouseUp),
        HostEvent::Document(PointerEvent::mouse_move(40.0)),
        HostEvent::Key(Thumb::Max, "PageDown"),
        HostEvent::Key(Thumb::Max, "Tab"),
        HostEvent::Edit(Thumb::Max, "65"),
        HostEvent::Edit(Thumb::Min, "twenty"),
    ];
    for event in script {
        host.dispatch(event);
    }
    println!("{}", host.render());
    Ok(())
}

fn fixed_session() -> Result<(), RangeError> {
    let document = DocumentListeners::shared();
    let args = FixedRangeArgsBuilder::default()
        .values(PRICE_TIERS.to_vec())
        .on_change(|values: RangeValues| {
            info!(min = values.min, max = values.max, indices = ?values.indices, "range changed")
        })
        .document(document.clone())
        .build()?;
    let host = Host::new("Fixed values range", RangeSlider::fixed(args)?, document, TRACK);
    println!("{}", host.render());

    let script = [
        HostEvent::Focus(Thumb::Max),
        HostEvent::Key(Thumb::Max, "ArrowLeft"),
        HostEvent::Document(PointerEvent::touch_move([200.0, 380.0])),
        HostEvent::Document(PointerEvent::TouchEnd),
        HostEvent::Key(Thumb::Min, "PageUp"),
        HostEvent::Key(Thumb::Min, "End"),
    ];
    for event in script {
        host.dispatch(event);
    }
    println!("{}", host.render());

    let slider = host.handle().lock();
    info!(
        min_index = slider.min_index(),
        max_index = slider.max_index(),
        "fixed session finished"
    );
    Ok(())
}
