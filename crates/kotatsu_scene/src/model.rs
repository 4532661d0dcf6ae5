/// The two mutually exclusive object models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveModel {
    #[default]
    Kotatsu,
    Embroidery,
}

impl ActiveModel {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            ActiveModel::Kotatsu => ActiveModel::Embroidery,
            ActiveModel::Embroidery => ActiveModel::Kotatsu,
        }
    }
}

/// One value per model, resolved through [`ModelTable::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelTable<T> {
    pub kotatsu: T,
    pub embroidery: T,
}

impl<T: Copy> ModelTable<T> {
    #[must_use]
    pub fn get(&self, model: ActiveModel) -> T {
        match model {
            ActiveModel::Kotatsu => self.kotatsu,
            ActiveModel::Embroidery => self.embroidery,
        }
    }
}
