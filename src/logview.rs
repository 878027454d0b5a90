// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Activity log pane state.
//!
//! An append-only, ever-growing list of lines. Automation failures land
//! here so the UI stays interactive; there are no dialogs and no error
//! counters — the operator reads the log.

#[derive(Default)]
pub(crate) struct LogView {
    lines: Vec<String>,
}

impl LogView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_accumulate_in_order() {
        let mut log = LogView::new();
        log.push("first");
        log.push("second");
        assert_eq!(log.lines(), ["first".to_string(), "second".to_string()]);
    }
}
