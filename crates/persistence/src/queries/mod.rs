// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `accounts`: account and student profile lookups
//! - `results`: result listing and per-semester aggregation

pub mod accounts;
pub mod results;
