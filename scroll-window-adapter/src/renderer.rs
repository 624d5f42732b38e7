/// Turns one dataset item into whatever the host renders for a row.
///
/// Any `Fn(&T) -> O` is a renderer. The list calls it once per rendered row on every render.
pub trait RowRenderer<T> {
    type Output;

    fn render_row(&self, item: &T) -> Self::Output;
}

impl<T, O, F> RowRenderer<T> for F
where
    F: Fn(&T) -> O,
{
    type Output = O;

    fn render_row(&self, item: &T) -> O {
        self(item)
    }
}
