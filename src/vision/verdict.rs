// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Binary hot dog verdict

use std::fmt;

/// ImageNet class 934: "hotdog, hot dog, red hot"
pub const HOTDOG_INDEX: usize = 934;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    HotDog,
    NotHotDog,
}

impl Verdict {
    /// Decide from the classifier's top-1 index
    pub fn from_top1(index: usize, target_index: usize) -> Self {
        if index == target_index {
            Verdict::HotDog
        } else {
            Verdict::NotHotDog
        }
    }

    /// Machine label: "hot dog" or "not hot dog"
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::HotDog => "hot dog",
            Verdict::NotHotDog => "not hot dog",
        }
    }

    /// Headline shown on the result page
    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::HotDog => "Hotdog!",
            Verdict::NotHotDog => "Not hotdog.",
        }
    }

    pub fn is_hot_dog(&self) -> bool {
        matches!(self, Verdict::HotDog)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
