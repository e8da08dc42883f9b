
mod property_reference;
