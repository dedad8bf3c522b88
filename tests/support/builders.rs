use tally::record::{CountedRecord, Restaurant, User};

pub struct RestaurantBuilder {
    name: String,
    cuisine_type: String,
    served: Option<i64>,
}

impl RestaurantBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cuisine_type: "Italian".to_string(),
            served: None,
        }
    }

    pub fn with_cuisine(mut self, cuisine_type: &str) -> Self {
        self.cuisine_type = cuisine_type.to_string();
        self
    }

    pub fn with_served(mut self, served: i64) -> Self {
        self.served = Some(served);
        self
    }

    pub fn build(self) -> Restaurant {
        let mut restaurant = Restaurant::new(self.name, self.cuisine_type);
        if let Some(served) = self.served {
            restaurant
                .set_counter(served)
                .expect("builder only takes non-negative counts");
        }
        restaurant
    }
}

pub struct UserBuilder {
    first_name: String,
    last_name: String,
    age: u32,
    email: String,
    location: String,
}

impl UserBuilder {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age: 30,
            email: format!("{}@email.com", first_name.to_lowercase()),
            location: "New York".to_string(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn build(self) -> User {
        User::new(
            self.first_name,
            self.last_name,
            self.age,
            self.email,
            self.location,
        )
    }
}
