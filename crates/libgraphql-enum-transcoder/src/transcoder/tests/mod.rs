
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::sync::Arc;

const FRUIT_SCHEMA: &str = r#"
    enum Fruit { Apple BlueBerry Peach GrapeFruit }

    interface Named { name: String }

    type Basket implements Named {
        name: String
        favorite: Fruit
        fruits: [Fruit!]!
        nested: [[Fruit]]
    }

    type Tree implements Named {
        name: String
        grows: Fruit
        height: Int
    }

    type Orchard {
        grows: Fruit
    }

    union Thing = Basket | Tree

    input BasketInput {
        favorite: Fruit
        fruits: [Fruit!]
        inner: BasketInput
        label: String
    }

    type Query {
        basket: Basket
        baskets: [Basket]
        fruit(fruit: Fruit): Fruit
        fruits(fruits: [Fruit!]): [Fruit]
        named: Named
        thing: Thing
        things: [Thing!]
    }

    type Mutation {
        addBasket(basket: BasketInput!): Basket
    }

    type Subscription {
        fruitPicked: Fruit
    }
"#;

fn fruit_schema() -> Arc<Schema> {
    Arc::new(SchemaBuilder::from_str(FRUIT_SCHEMA).unwrap().build().unwrap())
}
