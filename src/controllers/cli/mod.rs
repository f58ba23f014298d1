mod explore;

pub use explore::ExploreCliController;
