use mongodb::bson::{Document, doc, oid::ObjectId};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub country: String,
}

impl From<&Address> for Document {
    fn from(address: &Address) -> Self {
        doc! {
            "city": address.city.as_str(),
            "country": address.country.as_str(),
        }
    }
}

/// A student as it is stored, keyed by its `_id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub age: i64,
    pub address: Address,
}

/// A student as it is sent to clients, with the id rendered as hex.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StudentView {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub address: Address,
}

impl From<Student> for StudentView {
    fn from(
        Student {
            id,
            name,
            age,
            address,
        }: Student,
    ) -> Self {
        Self {
            id: id.to_hex(),
            name,
            age,
            address,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub address: Address,
}

impl NewStudent {
    pub fn into_student(self, id: ObjectId) -> Student {
        let Self { name, age, address } = self;
        Student {
            id,
            name,
            age,
            address,
        }
    }
}

/// Partial update of a [`Student`].
///
/// Omitted fields are left alone. An explicit `null` is rejected while deserialising, as no
/// field can be removed from a student.
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct StudentPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    pub address: Option<Address>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl StudentPatch {
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.address.is_none()
    }

    /// The body of a `$set` update. `address` goes in as a whole sub-document so it replaces
    /// the stored one rather than merging into it.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(age) = self.age {
            set.insert("age", age);
        }
        if let Some(address) = &self.address {
            set.insert("address", Document::from(address));
        }
        set
    }

    #[cfg(test)]
    pub fn apply(&self, student: &mut Student) {
        if let Some(name) = &self.name {
            student.name.clone_from(name);
        }
        if let Some(age) = self.age {
            student.age = age;
        }
        if let Some(address) = &self.address {
            student.address = address.clone();
        }
    }
}

/// Query parameters for listing students.
///
/// `age` is a lower bound (`age >= value`), not an exact match. An empty `country` is ignored.
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct StudentFilter {
    pub country: Option<String>,
    pub age: Option<i64>,
}

impl StudentFilter {
    fn country(&self) -> Option<&str> {
        self.country.as_deref().filter(|country| !country.is_empty())
    }

    pub fn to_document(&self) -> Document {
        let mut query = Document::new();
        if let Some(country) = self.country() {
            query.insert("address.country", country);
        }
        if let Some(age) = self.age {
            query.insert("age", doc! { "$gte": age });
        }
        query
    }

    #[cfg(test)]
    pub fn matches(&self, student: &Student) -> bool {
        self.country()
            .is_none_or(|country| student.address.country == country)
            && self.age.is_none_or(|age| student.age >= age)
    }
}
