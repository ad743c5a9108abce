//! # Commands
//!
//! CLI command implementations for todomark.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod edit;
pub mod list;
pub mod set;
pub mod setup;
pub mod show;
pub mod statuses;

pub use self::{
    edit::execute as edit,
    list::{collect_todos, execute as list, ListArgs, TodoEntry},
    set::{execute as set, SetArgs},
    setup::execute as setup,
    show::execute as show,
    statuses::execute as statuses,
};
