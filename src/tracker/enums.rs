pub mod announce_event;
