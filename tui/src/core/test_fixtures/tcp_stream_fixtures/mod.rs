// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod mock_async_stream;
pub mod mock_socket;

// Re-export.
pub use mock_async_stream::*;
pub use mock_socket::*;
