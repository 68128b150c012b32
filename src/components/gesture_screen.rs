use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, MouseEvent, Node, TouchEvent, WheelEvent, Window};
use yew::prelude::*;

use super::status_label::StatusLabel;
use crate::config::GestureConfig;
use crate::gesture::GestureEvent;
use crate::images::{AssetCatalog, JsRandom, RandomSource, SeededRandom};
use crate::mapper::GestureMapper;
use crate::screen::ScreenKind;
use crate::state::{GestureTarget, Owner, PointerFrame, RootRecognizer, SurfaceRecognizer, TouchState};
use crate::transform::Point;

const LONG_PRESS_POLL_MS: i32 = 50;
const IMAGE_W: f64 = 240.0;
const IMAGE_H: f64 = 180.0;

type Mapper = GestureMapper<Box<dyn RandomSource>>;

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(JsRandom),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GestureScreenProps {
    pub kind: ScreenKind,
    pub config: GestureConfig,
    /// Hidden screens keep their state but have no listeners or timer.
    pub visible: bool,
}

/// Notes whether any gesture reached the inner target.
struct Tracked<'a, T> {
    inner: &'a mut T,
    hit: bool,
}

impl<T: GestureTarget> GestureTarget for Tracked<'_, T> {
    fn on_gesture(&mut self, event: &mut GestureEvent) {
        self.hit = true;
        self.inner.on_gesture(event);
    }
}

/// Everything the DOM listeners need, cloned into each closure.
#[derive(Clone)]
struct Wiring {
    root: HtmlElement,
    image_ref: NodeRef,
    mapper: Rc<RefCell<Mapper>>,
    surface: Rc<RefCell<SurfaceRecognizer>>,
    root_rec: Rc<RefCell<RootRecognizer>>,
    touch: Rc<RefCell<TouchState>>,
    redraw: UseForceUpdateHandle,
}

impl Wiring {
    fn local(&self, client_x: i32, client_y: i32) -> Point {
        let rect = self.root.get_bounding_client_rect();
        Point::new(client_x as f64 - rect.left(), client_y as f64 - rect.top())
    }

    fn measure(&self) {
        let width = self.root.client_width() as f64;
        self.mapper.borrow_mut().resize(width);
        self.root_rec.borrow_mut().set_width(width);
    }

    fn on_surface(&self, target: Option<EventTarget>) -> bool {
        let Some(image) = self.image_ref.cast::<Node>() else {
            return false;
        };
        target
            .and_then(|t| t.dyn_into::<Node>().ok())
            .is_some_and(|node| image.contains(Some(&node)))
    }

    fn touch_frame(&self, e: &TouchEvent) -> PointerFrame {
        let list = e.touches();
        let touches = (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|t| self.local(t.client_x(), t.client_y()))
            .collect();
        PointerFrame::new(e.time_stamp(), touches)
    }

    fn begin(&self, target: Option<EventTarget>) {
        self.measure();
        let on_surface = self.on_surface(target);
        self.touch.borrow_mut().begin(on_surface);
    }

    fn feed(&self, frame: &PointerFrame) {
        let owner = self.touch.borrow().owner;
        let hit = {
            let mut mapper = self.mapper.borrow_mut();
            let mut target = Tracked {
                inner: &mut *mapper,
                hit: false,
            };
            match owner {
                Some(Owner::Surface) => self.surface.borrow_mut().frame(frame, &mut target),
                Some(Owner::Root) => self.root_rec.borrow_mut().frame(frame, &mut target),
                None => {}
            }
            target.hit
        };
        if frame.count() == 0 {
            self.touch.borrow_mut().end();
        }
        if hit {
            self.redraw.force_update();
        }
    }

    fn poll(&self, now_ms: f64) {
        if self.touch.borrow().owner != Some(Owner::Surface) {
            return;
        }
        let hit = {
            let mut mapper = self.mapper.borrow_mut();
            let mut target = Tracked {
                inner: &mut *mapper,
                hit: false,
            };
            self.surface.borrow_mut().poll(now_ms, &mut target);
            target.hit
        };
        if hit {
            self.redraw.force_update();
        }
    }

    fn wheel(&self, e: &WheelEvent) {
        if !self.on_surface(e.target()) {
            return;
        }
        e.prevent_default();
        let mut mapper = self.mapper.borrow_mut();
        self.surface
            .borrow_mut()
            .wheel(e.delta_y(), e.shift_key(), &mut *mapper);
        drop(mapper);
        self.redraw.force_update();
    }
}

/// DOM listeners and the long-press timer; removed when dropped.
struct Listeners {
    window: Window,
    root: HtmlElement,
    interval_id: Option<i32>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    mouse_down: Closure<dyn FnMut(MouseEvent)>,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_up: Closure<dyn FnMut(MouseEvent)>,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    _poll: Closure<dyn FnMut()>,
}

impl Drop for Listeners {
    fn drop(&mut self) {
        let root_pairs: [(&str, &js_sys::Function); 5] = [
            ("touchstart", self.touch_start.as_ref().unchecked_ref()),
            ("touchmove", self.touch_move.as_ref().unchecked_ref()),
            ("touchend", self.touch_end.as_ref().unchecked_ref()),
            ("touchcancel", self.touch_end.as_ref().unchecked_ref()),
            ("mousedown", self.mouse_down.as_ref().unchecked_ref()),
        ];
        for (name, cb) in root_pairs {
            let _ = self.root.remove_event_listener_with_callback(name, cb);
        }
        let _ = self
            .root
            .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("mousemove", self.mouse_move.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("mouseup", self.mouse_up.as_ref().unchecked_ref());
        if let Some(id) = self.interval_id {
            self.window.clear_interval_with_handle(id);
        }
    }
}

fn attach(wiring: Wiring, window: Window) -> Listeners {
    let touch_start = {
        let w = wiring.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            w.begin(e.target());
            w.feed(&w.touch_frame(&e));
            e.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    let touch_move = {
        let w = wiring.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            w.feed(&w.touch_frame(&e));
            e.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    let touch_end = {
        let w = wiring.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            w.feed(&w.touch_frame(&e));
            e.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    let mouse_down = {
        let w = wiring.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if e.button() != 0 {
                return;
            }
            w.begin(e.target());
            w.touch.borrow_mut().mouse_down = true;
            let p = w.local(e.client_x(), e.client_y());
            w.feed(&PointerFrame::single(e.time_stamp(), p.x, p.y));
        }) as Box<dyn FnMut(_)>)
    };
    let mouse_move = {
        let w = wiring.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if !w.touch.borrow().mouse_down {
                return;
            }
            let p = w.local(e.client_x(), e.client_y());
            w.feed(&PointerFrame::single(e.time_stamp(), p.x, p.y));
        }) as Box<dyn FnMut(_)>)
    };
    let mouse_up = {
        let w = wiring.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if !w.touch.borrow().mouse_down {
                return;
            }
            w.feed(&PointerFrame::released(e.time_stamp()));
        }) as Box<dyn FnMut(_)>)
    };
    let wheel = {
        let w = wiring.clone();
        Closure::wrap(Box::new(move |e: WheelEvent| w.wheel(&e)) as Box<dyn FnMut(_)>)
    };
    let poll = {
        let w = wiring.clone();
        let perf = window.performance();
        Closure::wrap(Box::new(move || {
            if let Some(now) = perf.as_ref().map(|p| p.now()) {
                w.poll(now);
            }
        }) as Box<dyn FnMut()>)
    };

    let root = wiring.root.clone();
    let root_pairs: [(&str, &js_sys::Function); 5] = [
        ("touchstart", touch_start.as_ref().unchecked_ref()),
        ("touchmove", touch_move.as_ref().unchecked_ref()),
        ("touchend", touch_end.as_ref().unchecked_ref()),
        ("touchcancel", touch_end.as_ref().unchecked_ref()),
        ("mousedown", mouse_down.as_ref().unchecked_ref()),
    ];
    for (name, cb) in root_pairs {
        root.add_event_listener_with_callback(name, cb).ok();
    }
    root.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref())
        .ok();
    window
        .add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())
        .ok();
    window
        .add_event_listener_with_callback("mouseup", mouse_up.as_ref().unchecked_ref())
        .ok();
    let interval_id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            poll.as_ref().unchecked_ref(),
            LONG_PRESS_POLL_MS,
        )
        .ok();

    Listeners {
        window,
        root,
        interval_id,
        touch_start,
        touch_move,
        touch_end,
        mouse_down,
        mouse_move,
        mouse_up,
        wheel,
        _poll: poll,
    }
}

#[function_component(GestureScreen)]
pub fn gesture_screen(props: &GestureScreenProps) -> Html {
    let root_ref = use_node_ref();
    let image_ref = use_node_ref();
    let redraw = use_force_update();
    let catalog = use_memo((), |_| AssetCatalog::default());
    let mapper = {
        let kind = props.kind;
        let seed = props.config.seed;
        use_mut_ref(move || {
            let mut m: Mapper = GestureMapper::new(random_source(seed), Point::ZERO, 0.0);
            if let Some(category) = kind.initial_category() {
                m.prime(category);
            }
            m
        })
    };
    let surface = use_mut_ref(|| SurfaceRecognizer::new(props.config.clone()));
    let root_rec = use_mut_ref(|| RootRecognizer::new(props.config.clone(), 0.0));
    let touch = use_mut_ref(TouchState::default);
    let centered = use_mut_ref(|| false);

    // Input is wired only while the screen is shown.
    {
        let wiring_parts = (
            root_ref.clone(),
            image_ref.clone(),
            mapper.clone(),
            surface.clone(),
            root_rec.clone(),
            touch.clone(),
            redraw.clone(),
        );
        use_effect_with(props.visible, move |visible| {
            let (root_ref, image_ref, mapper, surface, root_rec, touch, redraw) = wiring_parts;
            let listeners = if *visible {
                web_sys::window().zip(root_ref.cast::<HtmlElement>()).map(
                    |(window, root)| {
                        let wiring = Wiring {
                            root,
                            image_ref,
                            mapper,
                            surface: surface.clone(),
                            root_rec: root_rec.clone(),
                            touch: touch.clone(),
                            redraw,
                        };
                        attach(wiring, window)
                    },
                )
            } else {
                None
            };
            move || {
                drop(listeners);
                surface.borrow_mut().cancel();
                root_rec.borrow_mut().cancel();
                touch.borrow_mut().end();
            }
        });
    }

    // Place the image in the middle the first time the screen is shown.
    {
        let root_ref = root_ref.clone();
        let mapper = mapper.clone();
        let root_rec = root_rec.clone();
        let centered = centered.clone();
        let redraw = redraw.clone();
        use_effect_with(props.visible, move |visible| {
            if *visible && !*centered.borrow() {
                if let Some(root) = root_ref.cast::<HtmlElement>() {
                    let w = root.client_width() as f64;
                    let h = root.client_height() as f64;
                    if w > 0.0 {
                        let mut m = mapper.borrow_mut();
                        m.resize(w);
                        m.set_center(Point::new(w / 2.0, h / 2.0));
                        root_rec.borrow_mut().set_width(w);
                        *centered.borrow_mut() = true;
                        drop(m);
                        redraw.force_update();
                    }
                }
            }
            || ()
        });
    }

    let m = mapper.borrow();
    let view = m.surface();
    let src = view.image.as_deref().and_then(|name| catalog.resolve(name));
    let root_style = format!(
        "position:relative; width:100%; height:calc(100vh - 48px); overflow:hidden; touch-action:none; user-select:none; background:#0d1117; opacity:{}; display:{};",
        m.container().opacity,
        if props.visible { "block" } else { "none" }
    );
    let image_style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; margin-left:-{}px; margin-top:-{}px; transform:{}; object-fit:cover; border-radius:6px; visibility:{}; -webkit-user-drag:none;",
        view.center.x,
        view.center.y,
        IMAGE_W,
        IMAGE_H,
        IMAGE_W / 2.0,
        IMAGE_H / 2.0,
        view.transform.to_css(),
        if src.is_some() { "visible" } else { "hidden" }
    );
    let on_error = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlElement>() {
            img.set_hidden(true);
        }
    });
    let on_load = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlElement>() {
            img.set_hidden(false);
        }
    });

    html! {
        <div ref={root_ref} style={root_style}>
            <div style="position:absolute; top:12px; left:12px; font-size:14px; opacity:0.7;">{ props.kind.title() }</div>
            <img
                ref={image_ref}
                src={src.unwrap_or_default()}
                alt=""
                draggable="false"
                style={image_style}
                onerror={on_error}
                onload={on_load}
            />
            <StatusLabel text={m.status().text().to_string()} />
        </div>
    }
}
