//! Types shared by the frontend and the backend.
//!
//! Nothing in here touches the DOM, the network or the database, so the same
//! validation rules run in the browser and on the server.

pub mod domain;
pub mod shared;
pub mod system;
