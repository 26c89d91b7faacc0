use std::sync::Mutex;

/// The immediate children of one directory, shared by that directory's
/// workers.
///
/// Workers pop entries until the queue runs empty; nothing is ever pushed
/// after construction, so the queue only shrinks. Pop order is LIFO, which
/// callers must not rely on.
pub(crate) struct WorkQueue<T> {
    items: Mutex<Vec<T>>,
}

impl<T> WorkQueue<T> {
    pub(crate) fn new(items: Vec<T>) -> WorkQueue<T> {
        WorkQueue {
            items: Mutex::new(items),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub(crate) fn pop(&self) -> Option<T> {
        self.items.lock().unwrap().pop()
    }
}
