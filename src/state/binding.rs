/// Something a swipe recognizer can subscribe to for touch input.
pub trait TouchSurface {
    fn listen(&self);
    fn unlisten(&self);
}

/// Attach/detach bookkeeping for one surface. Both operations are idempotent.
pub struct SwipeBinding<S: TouchSurface> {
    surface: Option<S>,
    attached: bool,
}

impl<S: TouchSurface> SwipeBinding<S> {
    pub fn new(surface: Option<S>) -> Self {
        Self { surface, attached: false }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// No-op when already attached or when no surface is available yet.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        if let Some(s) = &self.surface {
            s.listen();
            self.attached = true;
        }
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(s) = &self.surface {
            s.unlisten();
        }
        self.attached = false;
    }

    /// Attaches when detached and vice versa. Returns whether the binding ended up attached,
    /// which stays `false` when there is no surface to attach to.
    pub fn toggle(&mut self) -> bool {
        if self.attached {
            self.detach();
        } else {
            self.attach();
        }
        self.attached
    }

    /// Swaps the bound surface, detaching from the old one first. Leaves the binding detached.
    pub fn replace_surface(&mut self, surface: Option<S>) {
        self.detach();
        self.surface = surface;
    }
}

impl<S: TouchSurface> Drop for SwipeBinding<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
