/// Progress reported to an [`Observer`] while a sort runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent {
    /// A recursive call starts on `low..=high`. `depth` counts the calls currently on the stack,
    /// the outermost one is 1.
    Enter {
        low: usize,
        high: usize,
        depth: usize,
    },
    /// The pivot of `low..=high` landed on its final position `pivot`.
    Partitioned {
        low: usize,
        high: usize,
        pivot: usize,
    },
}

/// Caller supplied hook receiving [`SortEvent`]s.
pub type Observer<'a> = &'a mut dyn FnMut(&SortEvent);

/// Tracks recursion depth and forwards events to the optional observer.
pub(crate) struct Probe<'a> {
    hook: Option<Observer<'a>>,
    depth: usize,
}

impl<'a> Probe<'a> {
    pub(crate) fn new(hook: Option<Observer<'a>>) -> Self {
        Self { hook, depth: 0 }
    }

    #[inline]
    pub(crate) fn enter(&mut self, low: usize, high: usize) {
        self.depth += 1;

        if let Some(hook) = self.hook.as_deref_mut() {
            hook(&SortEvent::Enter {
                low,
                high,
                depth: self.depth,
            });
        }
    }

    #[inline]
    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }

    #[inline]
    pub(crate) fn partitioned(&mut self, low: usize, high: usize, pivot: usize) {
        if let Some(hook) = self.hook.as_deref_mut() {
            hook(&SortEvent::Partitioned { low, high, pivot });
        }
    }
}
