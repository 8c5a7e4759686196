pub mod webhook_repository_impl;
