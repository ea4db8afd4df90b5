mod adapters;
mod golden;
