// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot iteration over stations.

use std::iter::FusedIterator;
use std::sync::Arc;

use crate::station::Station;

/// Iterator over the stations of one snapshot, in index order.
///
/// The iterator holds its own reference to the snapshot taken when it was
/// created. Refreshes or mutations that happen afterwards are not visible
/// to it. Create a new iterator to start over.
#[derive(Debug, Clone)]
pub struct Stations {
    snapshot: Arc<Vec<Station>>,
    cursor: usize,
}

impl Stations {
    pub(crate) fn new(snapshot: Arc<Vec<Station>>) -> Self {
        Self {
            snapshot,
            cursor: 0,
        }
    }
}

impl Iterator for Stations {
    type Item = Station;

    fn next(&mut self) -> Option<Self::Item> {
        let station = self.snapshot.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(station)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Stations {}

impl FusedIterator for Stations {}
