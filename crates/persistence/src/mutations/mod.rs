// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `accounts`: account + student profile creation
//! - `results`: result insertion (demo seeding only)
//!
//! Multi-row writes run inside a single transaction.

pub mod accounts;
pub mod results;
