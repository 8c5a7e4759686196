pub mod webhook_repository;
