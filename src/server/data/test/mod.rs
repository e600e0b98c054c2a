mod competition;
mod drone;
mod drone_category;
mod pilot;
