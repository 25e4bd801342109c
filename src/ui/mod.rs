/// UI module exports

pub mod search;
