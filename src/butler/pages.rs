//! Page-by-page listing for long collections.
//!
//! A [`Paginator`] borrows the items and hands out a fresh [`Pages`] iterator every
//! time [`Paginator::pages`] is called, so a listing can be restarted from the top.

use crate::error::{ButlerError, Result};
use std::fmt::Display;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: NonZeroUsize,
}

impl<'a, T: Display> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or_else(|| {
            ButlerError::InvalidSelection("page size cannot be less than 1".to_string())
        })?;
        Ok(Self { items, page_size })
    }

    pub fn pages(&self) -> Pages<'a, T> {
        Pages {
            chunks: self.items.chunks(self.page_size.get()),
        }
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }
}

/// Rendered pages, each joining up to `page_size` entries with newlines.
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    chunks: std::slice::Chunks<'a, T>,
}

impl<T: Display> Iterator for Pages<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.chunks.next().map(|chunk| {
            chunk
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}
