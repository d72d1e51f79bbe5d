pub mod rating_bar;
