//! Static sample products served when live extraction is unavailable.

use crate::types::Product;

/// The fixed four-item list returned in place of search results.
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            title: "Apple iPhone 13 Pro Max".into(),
            image: "https://images.pexels.com/photos/1647976/pexels-photo-1647976.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".into(),
            store_name: "Apple Store".into(),
            price: "$1,099.00".into(),
            rating: "4.8".into(),
            review_count: "2,453".into(),
            seller: "Apple Inc.".into(),
            link: "https://www.apple.com/shop/buy-iphone/iphone-13-pro".into(),
            detailed_description: String::new(),
        },
        Product {
            id: "2".into(),
            title: "Samsung Galaxy S22 Ultra".into(),
            image: "https://images.pexels.com/photos/7055323/pexels-photo-7055323.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".into(),
            store_name: "Samsung".into(),
            price: "$1,199.99".into(),
            rating: "4.7".into(),
            review_count: "1,832".into(),
            seller: "Samsung Electronics".into(),
            link: "https://www.samsung.com/us/smartphones/galaxy-s22-ultra/".into(),
            detailed_description: String::new(),
        },
        Product {
            id: "3".into(),
            title: "Sony WH-1000XM4 Wireless Noise Cancelling Headphones".into(),
            image: "https://images.pexels.com/photos/3394664/pexels-photo-3394664.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".into(),
            store_name: "Sony".into(),
            price: "$348.00".into(),
            rating: "4.7".into(),
            review_count: "738".into(),
            seller: "Sony Electronics".into(),
            link: "https://electronics.sony.com/audio/headphones/headband/p/wh1000xm4-b".into(),
            detailed_description: String::new(),
        },
        Product {
            id: "4".into(),
            title: "Nike Air Max 270".into(),
            image: "https://images.pexels.com/photos/1102777/pexels-photo-1102777.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".into(),
            store_name: "Nike".into(),
            price: "$150.00".into(),
            rating: "4.5".into(),
            review_count: "428".into(),
            seller: "Nike Inc.".into(),
            link: "https://www.nike.com/t/air-max-270-mens-shoes-KkLcGR".into(),
            detailed_description: String::new(),
        },
    ]
}

/// The fixed detail product, carrying the requested `id`.
pub fn fallback_product(id: &str) -> Product {
    Product {
        id: id.to_owned(),
        title: "Apple MacBook Pro 16-inch".into(),
        image: "https://images.pexels.com/photos/18105/pexels-photo.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".into(),
        store_name: "Apple Store".into(),
        price: "$2,399.00".into(),
        rating: "4.9".into(),
        review_count: "856".into(),
        seller: "Apple Inc.".into(),
        link: "https://www.apple.com/shop/buy-mac/macbook-pro".into(),
        detailed_description: "The Apple MacBook Pro features a brilliant Retina display, powerful processors, amazing graphics, and the versatile Touch Bar. It's our most powerful notebook. Pushed even further. The 16-inch MacBook Pro brings a whole new class of performance to the notebook. With up to 8 cores of processing power and an expansive 16-inch Retina display, it's the largest Retina display ever in a Mac notebook.".into(),
    }
}
