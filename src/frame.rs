use crate::assets::{self, SharedInbox};
use crate::render;
use galaxy_core::{App, AppEvent, ModelRef};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedApp = Rc<RefCell<App>>;

pub struct FrameContext<'a> {
    pub app: SharedApp,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub inbox: SharedInbox,
    pub started: Instant,
    pub next_model: u32,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        app: SharedApp,
        gpu: Option<render::GpuState<'a>>,
        canvas: web::HtmlCanvasElement,
        inbox: SharedInbox,
    ) -> Self {
        Self {
            app,
            gpu,
            canvas,
            inbox,
            started: Instant::now(),
            next_model: 0,
        }
    }

    pub fn frame(&mut self) {
        self.drain_inbox();

        let elapsed_sec = self.started.elapsed().as_secs_f32();
        let mut app = self.app.borrow_mut();
        app.dispatch(AppEvent::Frame { elapsed_sec });

        if let Some(g) = &mut self.gpu {
            for path in g.sync(&app.scene) {
                assets::spawn_texture_load(path, self.inbox.clone());
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&app.scene, &app.rig) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::debug!("[gpu] surface lost, reconfiguring next frame");
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    fn drain_inbox(&mut self) {
        let (model, textures) = {
            let mut inbox = self.inbox.borrow_mut();
            (inbox.model.take(), std::mem::take(&mut inbox.textures))
        };
        if let Some(asset) = model {
            let model_ref = ModelRef(self.next_model);
            self.next_model += 1;
            if let Some(g) = &mut self.gpu {
                g.install_model(model_ref, asset);
            }
            self.app
                .borrow_mut()
                .dispatch(AppEvent::ModelLoaded(model_ref));
        }
        if let Some(g) = &mut self.gpu {
            for (path, image) in textures {
                g.install_texture(path, image);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
