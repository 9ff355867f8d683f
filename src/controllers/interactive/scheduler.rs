use std::collections::BTreeSet;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{debug, error, trace, warn};

use crate::controllers::interactive::data::engine_config::EngineConfig;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::render_event::{RenderEvent, RenderFailure};
use crate::controllers::interactive::ports::presenter_port::RenderEventPort;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::render::{check_pixel_limit, render};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::kernel::KernelParams;
use crate::core::util::iteration_budget::max_iterations_for_zoom;

type SpawnWorker = fn(String, Arc<SharedState>) -> io::Result<JoinHandle<()>>;

fn spawn_named_worker(name: String, shared: Arc<SharedState>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(name)
        .spawn(move || worker_loop(&shared))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    pub submitted: u64,
    pub completed: u64,
    pub superseded: u64,
    /// Queued requests replaced by a newer submission before any worker
    /// picked them up.
    pub dropped: u64,
    pub failed: u64,
}

#[derive(Default)]
struct Counters {
    submitted: AtomicU64,
    completed: AtomicU64,
    superseded: AtomicU64,
    dropped: AtomicU64,
    failed: AtomicU64,
}

struct Bookkeeping {
    next_request_id: u64,
    queued: Option<RenderRequest>,
    running: BTreeSet<u64>,
    shutdown: bool,
}

impl Bookkeeping {
    fn has_younger_than(&self, request_id: u64) -> bool {
        self.queued
            .as_ref()
            .is_some_and(|queued| queued.request_id() > request_id)
            || self.running.range(request_id + 1..).next().is_some()
    }
}

struct SharedState {
    bookkeeping: Mutex<Bookkeeping>,
    wake: Condvar,
    // Held across the decision and the hand-off so presented frame ids stay
    // strictly increasing. Always taken before `bookkeeping`.
    highest_delivered: Mutex<u64>,
    highest_delivered_snapshot: AtomicU64,
    counters: Counters,
    max_render_pixels: u64,
    presenter_port: Arc<dyn RenderEventPort>,
}

impl SharedState {
    fn next_request(&self) -> Option<RenderRequest> {
        let mut bookkeeping = lock(&self.bookkeeping);

        loop {
            if bookkeeping.shutdown {
                return None;
            }

            if let Some(request) = bookkeeping.queued.take() {
                bookkeeping.running.insert(request.request_id());
                return Some(request);
            }

            bookkeeping = self
                .wake
                .wait(bookkeeping)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn deliver(
        &self,
        request: &RenderRequest,
        result: Result<PixelBuffer, RenderError>,
        started: Instant,
    ) {
        let request_id = request.request_id();
        let mut highest_delivered = lock(&self.highest_delivered);

        let settled = {
            let mut bookkeeping = lock(&self.bookkeeping);
            bookkeeping.running.remove(&request_id);
            !bookkeeping.has_younger_than(request_id)
        };

        let event = match result {
            Ok(pixel_buffer) if request_id > *highest_delivered => {
                *highest_delivered = request_id;
                self.highest_delivered_snapshot
                    .store(request_id, Ordering::Release);
                self.counters.completed.fetch_add(1, Ordering::Relaxed);

                RenderEvent::Frame(FrameData {
                    request_id,
                    pixel_buffer,
                    supersample_factor: request.viewport().supersample_factor(),
                    render_duration: started.elapsed(),
                    settled,
                })
            }
            Ok(_) => {
                warn!(
                    "request {} finished after request {} was delivered; discarding",
                    request_id, *highest_delivered
                );
                self.counters.superseded.fetch_add(1, Ordering::Relaxed);

                RenderEvent::Superseded { request_id }
            }
            Err(error) => {
                error!("render request {} failed: {}", request_id, error);
                self.counters.failed.fetch_add(1, Ordering::Relaxed);

                RenderEvent::Failed(RenderFailure {
                    request_id,
                    error,
                    settled,
                })
            }
        };

        self.presenter_port.present(event);
    }
}

// A panicking render must still be delivered, or its id stays in `running`
// and every later result is reported as unsettled.
fn catch_render_panic(
    request_id: u64,
    render_fn: impl FnOnce() -> Result<PixelBuffer, RenderError>,
) -> Result<PixelBuffer, RenderError> {
    panic::catch_unwind(AssertUnwindSafe(render_fn)).unwrap_or_else(|_| {
        error!("render worker panicked on request {}", request_id);
        Err(RenderError::WorkerPanicked { request_id })
    })
}

fn worker_loop(shared: &SharedState) {
    while let Some(request) = shared.next_request() {
        trace!(
            "rendering request {} ({}x{}, {} iterations)",
            request.request_id(),
            request.viewport().render_width(),
            request.viewport().render_height(),
            request.max_iterations()
        );

        let started = Instant::now();
        let result = catch_render_panic(request.request_id(), || {
            render(
                request.viewport(),
                request.kernel(),
                request.colour_scheme(),
                request.max_iterations(),
                shared.max_render_pixels,
            )
        });

        trace!(
            "request {} finished in {:?}",
            request.request_id(),
            started.elapsed()
        );

        shared.deliver(&request, result, started);
    }
}

/// Dispatches render requests to a fixed pool of worker threads.
///
/// At most one request waits in the queue; a newer submission replaces it.
/// Running work always completes, and results reach the presenter port in
/// strictly increasing `request_id` order for `RenderEvent::Frame`.
pub struct RenderScheduler {
    shared: Arc<SharedState>,
    workers: Vec<JoinHandle<()>>,
}

impl RenderScheduler {
    pub fn new(
        config: EngineConfig,
        presenter_port: Arc<dyn RenderEventPort>,
    ) -> Result<Self, RenderError> {
        Self::with_spawner(config, presenter_port, spawn_named_worker)
    }

    fn with_spawner(
        config: EngineConfig,
        presenter_port: Arc<dyn RenderEventPort>,
        spawn_worker: SpawnWorker,
    ) -> Result<Self, RenderError> {
        let shared = Arc::new(SharedState {
            bookkeeping: Mutex::new(Bookkeeping {
                next_request_id: 1,
                queued: None,
                running: BTreeSet::new(),
                shutdown: false,
            }),
            wake: Condvar::new(),
            highest_delivered: Mutex::new(0),
            highest_delivered_snapshot: AtomicU64::new(0),
            counters: Counters::default(),
            max_render_pixels: config.max_render_pixels,
            presenter_port,
        });

        let worker_count = config.worker_count.max(1);
        let mut workers = Vec::with_capacity(worker_count);
        let mut attempts = 0;

        for index in 0..worker_count {
            let mut backoff = config.spawn_backoff;

            for retry in 0..=config.spawn_retries {
                attempts += 1;

                match spawn_worker(format!("render-worker-{}", index), Arc::clone(&shared)) {
                    Ok(handle) => {
                        workers.push(handle);
                        break;
                    }
                    Err(err) if retry < config.spawn_retries => {
                        warn!(
                            "failed to spawn render worker {} ({}); retrying in {:?}",
                            index, err, backoff
                        );
                        thread::sleep(backoff);
                        backoff *= 2;
                    }
                    Err(err) => {
                        warn!("giving up on render worker {}: {}", index, err);
                    }
                }
            }
        }

        if workers.is_empty() {
            error!("no render worker could be started");
            return Err(RenderError::WorkerUnavailable { attempts });
        }

        debug!("render scheduler started with {} workers", workers.len());

        Ok(Self { shared, workers })
    }

    /// Submits a render, deriving the iteration budget from the zoom factor.
    pub fn submit_render(
        &self,
        viewport: Viewport,
        kernel: KernelParams,
        colour_scheme: ColourSchemeKind,
    ) -> Result<u64, RenderError> {
        let max_iterations = max_iterations_for_zoom(viewport.zoom_factor())?;

        self.submit_request_with_budget(viewport, kernel, colour_scheme, max_iterations)
    }

    /// Validates and queues a request, returning its id.
    ///
    /// A rejected request consumes no id. A request still waiting in the
    /// queue is dropped in favour of this one.
    pub fn submit_request_with_budget(
        &self,
        viewport: Viewport,
        kernel: KernelParams,
        colour_scheme: ColourSchemeKind,
        max_iterations: u32,
    ) -> Result<u64, RenderError> {
        if max_iterations == 0 {
            return Err(RenderError::ZeroMaxIterations);
        }

        check_pixel_limit(&viewport, self.shared.max_render_pixels)?;

        let request_id = {
            let mut bookkeeping = lock(&self.shared.bookkeeping);

            if bookkeeping.shutdown {
                return Err(RenderError::WorkerUnavailable { attempts: 0 });
            }

            let request_id = bookkeeping.next_request_id;
            bookkeeping.next_request_id += 1;

            let request = RenderRequest::new(
                request_id,
                viewport,
                kernel,
                colour_scheme,
                max_iterations,
            );

            if let Some(replaced) = bookkeeping.queued.replace(request) {
                debug!(
                    "dropping queued request {} in favour of {}",
                    replaced.request_id(),
                    request_id
                );
                self.shared.counters.dropped.fetch_add(1, Ordering::Relaxed);
            }

            request_id
        };

        self.shared
            .counters
            .submitted
            .fetch_add(1, Ordering::Relaxed);
        self.shared.wake.notify_one();

        debug!(
            "submitted request {} ({:?}, zoom {}, {} iterations)",
            request_id,
            kernel.kind(),
            viewport.zoom_factor(),
            max_iterations
        );

        Ok(request_id)
    }

    #[must_use]
    pub fn highest_delivered(&self) -> u64 {
        self.shared
            .highest_delivered_snapshot
            .load(Ordering::Acquire)
    }

    #[must_use]
    pub fn stats(&self) -> SchedulerStats {
        let counters = &self.shared.counters;

        SchedulerStats {
            submitted: counters.submitted.load(Ordering::Relaxed),
            completed: counters.completed.load(Ordering::Relaxed),
            superseded: counters.superseded.load(Ordering::Relaxed),
            dropped: counters.dropped.load(Ordering::Relaxed),
            failed: counters.failed.load(Ordering::Relaxed),
        }
    }

    /// Nothing queued and nothing running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        let bookkeeping = lock(&self.shared.bookkeeping);
        bookkeeping.queued.is_none() && bookkeeping.running.is_empty()
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    #[cfg(test)]
    fn has_queued(&self) -> bool {
        lock(&self.shared.bookkeeping).queued.is_some()
    }

    /// Stops accepting work, drops any queued request and waits for running
    /// renders to finish.
    pub fn shutdown(&mut self) {
        {
            let mut bookkeeping = lock(&self.shared.bookkeeping);
            bookkeeping.shutdown = true;

            if let Some(dropped) = bookkeeping.queued.take() {
                debug!("dropping queued request {} on shutdown", dropped.request_id());
                self.shared.counters.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }

        self.shared.wake.notify_all();

        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                error!("render worker panicked");
            }
        }
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
