pub trait Title {
    fn title(&self) -> &str;
}

impl<T> Title for &T
where
    T: Title + ?Sized,
{
    fn title(&self) -> &str {
        (**self).title()
    }
}
