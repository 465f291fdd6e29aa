//
// This file is part of tree_search.
//
// tree_search is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tree_search is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tree_search. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

use std::cmp;
use std::fmt;
use std::ops::AddAssign;

/// Counters for a single ply of a search.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatisticsLevel {
    /// Internal nodes whose children were searched.
    pub visited: u32,
    /// Nodes whose stored value was returned, at a terminal node or at the horizon.
    pub evaluated: u32,
    /// Times the remaining siblings were abandoned because `beta <= alpha`.
    pub cutoffs: u32,
    /// Siblings that were never searched because of those cutoffs.
    pub pruned: u32,
}

impl StatisticsLevel {
    pub fn new() -> StatisticsLevel {
        StatisticsLevel::default()
    }
}

impl AddAssign for StatisticsLevel {
    fn add_assign(&mut self, other: StatisticsLevel) {
        self.visited += other.visited;
        self.evaluated += other.evaluated;
        self.cutoffs += other.cutoffs;
        self.pruned += other.pruned;
    }
}

/// Statistics from a search, indexed by ply.  Ply 0 is the root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    pub plies: Vec<StatisticsLevel>,
    /// Seconds spent searching.
    pub time: f32,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    /// The counters for `ply`, growing the table as the search descends.
    pub fn level_mut(&mut self, ply: usize) -> &mut StatisticsLevel {
        if self.plies.len() <= ply {
            self.plies.resize(ply + 1, StatisticsLevel::new());
        }
        &mut self.plies[ply]
    }

    pub fn totals(&self) -> StatisticsLevel {
        let mut totals = StatisticsLevel::new();
        for level in &self.plies {
            totals += *level;
        }
        totals
    }

    /// The number of nodes the search touched.
    pub fn nodes(&self) -> u32 {
        let totals = self.totals();
        totals.visited + totals.evaluated
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let titles = [
            "Visited:",
            "Evaluated:",
            "Cutoffs:",
            "Pruned:",
        ];

        let title_width = titles.iter().map(|title| title.len()).max().unwrap_or(0) + 1;

        let row = |level: &StatisticsLevel| vec![
            format!("{}", level.visited),
            format!("{}", level.evaluated),
            format!("{}", level.cutoffs),
            format!("{}", level.pruned),
        ];

        let mut columns = self.plies.iter().map(|level| row(level)).collect::<Vec<_>>();
        columns.push(row(&self.totals()));

        let headers = (0..self.plies.len())
            .map(|ply| format!("{}", ply))
            .chain(Some(String::from("Total")))
            .collect::<Vec<_>>();

        let column_widths = columns.iter().zip(&headers).map(|(column, header)|
            column.iter().map(|stat| stat.len()).fold(header.len(), cmp::max)
        ).collect::<Vec<_>>();

        write!(f, "  {0:1$}", "Ply:", title_width)?;
        for (header, width) in headers.iter().zip(&column_widths) {
            write!(f, "  {0:>1$}", header, width)?;
        }
        for (i, title) in titles.iter().enumerate() {
            write!(f, "\n  {0:1$}", title, title_width)?;
            for (column, width) in columns.iter().zip(&column_widths) {
                write!(f, "  {0:>1$}", column[i], width)?;
            }
        }
        write!(f, "\n  {0:1$}  {2:.4}s", "Time:", title_width, self.time)
    }
}
