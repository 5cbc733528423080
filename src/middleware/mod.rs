// ABOUTME: HTTP middleware configuration applied around the router
// ABOUTME: Cross-origin policy for browser clients of the review flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from configuration
pub mod cors;

// CORS configuration
pub use cors::setup_cors;
