//! Flow-shop domain models.
//!
//! Core data types for representing permutation flow-shop problems and
//! solutions. A problem is a machine count plus a set of jobs; a solution
//! is a permutation of those jobs applied identically on every machine.
//!
//! # Domain Mappings
//!
//! | u-flowshop | Manufacturing | Print shop | Batch pipeline |
//! |------------|---------------|------------|----------------|
//! | Job | Order | Print run | Batch |
//! | Machine | Workstation | Press stage | Pipeline stage |
//! | Schedule | Production sequence | Run order | Batch order |

mod instance;
mod job;
mod schedule;

pub use instance::Instance;
pub use job::Job;
pub use schedule::Schedule;
