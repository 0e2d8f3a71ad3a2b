use std::fmt;
use std::ops::Index;

/// Growable pool of reusable elements.
///
/// Elements are created through a factory and kept allocated across
/// [`reset`](GrowQueue::reset) calls. Only the first `len()` elements are
/// visible; [`grow`](GrowQueue::grow) hands back the next slot, reusing an
/// old element when one is available.
pub struct GrowQueue<T> {
    data: Vec<T>,
    size: usize,
    factory: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> GrowQueue<T> {
    /// Create an empty queue with no pre-allocated elements
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::with_capacity(0, factory)
    }

    /// Create a queue with `capacity` elements already built by `factory`
    pub fn with_capacity<F>(capacity: usize, factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let mut data = Vec::with_capacity(capacity);
        data.extend((0..capacity).map(|_| factory()));
        Self {
            data,
            size: 0,
            factory: Box::new(factory),
        }
    }

    /// Mark every element unused without dropping it
    pub fn reset(&mut self) {
        self.size = 0;
    }

    /// Activate the next element and return it for overwriting
    pub fn grow(&mut self) -> &mut T {
        if self.size == self.data.len() {
            self.data.push((self.factory)());
        }
        let idx = self.size;
        self.size += 1;
        &mut self.data[idx]
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of elements that exist, active or not
    pub fn allocated(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.size]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Default + 'static> Default for GrowQueue<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T> Index<usize> for GrowQueue<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowQueue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowQueue")
            .field("active", &self.as_slice())
            .field("allocated", &self.data.len())
            .finish()
    }
}
