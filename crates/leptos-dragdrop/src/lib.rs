//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for swapping list rows.
//! A press only becomes a drag after the pointer moves past a small threshold,
//! so plain clicks on a row still reach their handlers.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `just_ended` stays set after a release
const CLICK_SUPPRESS_MS: u32 = 100;

/// Pointer position in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn from_event(ev: &web_sys::MouseEvent) -> Self {
        Self::new(ev.client_x(), ev.client_y())
    }

    /// Whether `other` is far enough away to count as a drag
    pub fn exceeds_threshold(&self, other: Point) -> bool {
        (other.x - self.x).abs() > DRAG_THRESHOLD_PX || (other.y - self.y).abs() > DRAG_THRESHOLD_PX
    }
}

/// Where a drag gesture currently stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Button held on a row, not moved far enough yet
    Pending { id: u32, origin: Point },
    /// Row is being dragged, optionally over another row
    Dragging { id: u32, over: Option<u32> },
}

impl DragPhase {
    pub fn press(id: u32, origin: Point) -> Self {
        DragPhase::Pending { id, origin }
    }

    /// Promote a pending press to a drag once the pointer has moved enough
    pub fn moved(self, to: Point) -> Self {
        match self {
            DragPhase::Pending { id, origin } if origin.exceeds_threshold(to) => {
                DragPhase::Dragging { id, over: None }
            }
            other => other,
        }
    }

    /// Pointer entered row `target`. A row is never its own drop target.
    pub fn enter(self, target: u32) -> Self {
        match self {
            DragPhase::Dragging { id, .. } if id != target => DragPhase::Dragging { id, over: Some(target) },
            other => other,
        }
    }

    pub fn leave(self) -> Self {
        match self {
            DragPhase::Dragging { id, .. } => DragPhase::Dragging { id, over: None },
            other => other,
        }
    }

    /// `(dragged, target)` when released over a row
    pub fn release(self) -> Option<(u32, u32)> {
        match self {
            DragPhase::Dragging { id, over: Some(target) } => Some((id, target)),
            _ => None,
        }
    }

    pub fn dragging_id(&self) -> Option<u32> {
        match self {
            DragPhase::Dragging { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn hovered_id(&self) -> Option<u32> {
        match self {
            DragPhase::Dragging { over, .. } => *over,
            _ => None,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub phase: RwSignal<DragPhase>,
    /// Set briefly after a drag is released so the trailing click can be ignored
    pub just_ended: RwSignal<bool>,
}

impl DndSignals {
    pub fn is_dragging(&self, id: u32) -> bool {
        self.phase.get().dragging_id() == Some(id)
    }

    pub fn is_drop_target(&self, id: u32) -> bool {
        self.phase.get().hovered_id() == Some(id)
    }

    /// True while the click that trails a drag release should be ignored
    pub fn suppresses_click(&self) -> bool {
        self.just_ended.get_untracked()
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        phase: RwSignal::new(DragPhase::Idle),
        just_ended: RwSignal::new(false),
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    let was_dragging = dnd.phase.get_untracked().dragging_id().is_some();
    dnd.phase.set(DragPhase::Idle);
    if was_dragging {
        dnd.just_ended.set(true);
        let clear = dnd.just_ended;
        Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
    }
}

/// Mousedown handler for draggable rows
pub fn make_on_mousedown(dnd: DndSignals, id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Controls inside the row keep their own click behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.phase.set(DragPhase::press(id, Point::from_event(&ev)));
    }
}

/// Mouseenter handler for rows
pub fn make_on_item_mouseenter(dnd: DndSignals, id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        let phase = dnd.phase.get_untracked();
        let next = phase.enter(id);
        if next != phase {
            dnd.phase.set(next);
        }
    }
}

/// Mouseleave handler for rows
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        let phase = dnd.phase.get_untracked();
        let next = phase.leave();
        if next != phase {
            dnd.phase.set(next);
        }
    }
}

fn bind_document_listener(event: &str, listener: Closure<dyn FnMut(web_sys::MouseEvent)>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
    }
    listener.forget();
}

/// Document mousemove: turns a pending press into a drag
pub fn bind_global_mousemove(dnd: DndSignals) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let phase = dnd.phase.get_untracked();
        let next = phase.moved(Point::from_event(&ev));
        if next != phase {
            dnd.phase.set(next);
        }
    });
    bind_document_listener("mousemove", on_mousemove);
}

/// Document mouseup: reports `(dragged, target)` to `on_drop` when released over a row.
///
/// Also binds the mousemove listener.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, u32) + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let released = dnd.phase.get_untracked().release();
        end_drag(&dnd);
        if let Some((dragged, target)) = released {
            on_drop(dragged, target);
        }
    });
    bind_document_listener("mouseup", on_mouseup);

    bind_global_mousemove(dnd);
}
