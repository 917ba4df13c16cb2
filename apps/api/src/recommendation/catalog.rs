//! Static reference data for the built-in career tracks.
//!
//! Keywords may be written in any case; `Track::new` normalizes them.

pub const DS_KEYWORDS: &[&str] = &[
    "tensorflow",
    "keras",
    "pytorch",
    "machine learning",
    "deep Learning",
    "flask",
    "streamlit",
    "data science",
];

pub const DS_SKILLS: &[&str] = &[
    "Data Visualization",
    "Predictive Analysis",
    "Statistical Modeling",
    "Data Mining",
    "Clustering & Classification",
    "Data Analytics",
    "Quantitative Analysis",
    "Web Scraping",
    "ML Algorithms",
    "Keras",
    "Pytorch",
    "Probability",
    "Scikit-learn",
    "Tensorflow",
    "Flask",
    "Streamlit",
];

pub const DS_COURSES: &[(&str, &str)] = &[
    (
        "Machine Learning Crash Course by Google [Free]",
        "https://developers.google.com/machine-learning/crash-course",
    ),
    (
        "Machine Learning A-Z by Udemy",
        "https://www.udemy.com/course/machinelearning/",
    ),
    (
        "Machine Learning by Andrew NG",
        "https://www.coursera.org/learn/machine-learning",
    ),
    (
        "Data Scientist Master Program of Simplilearn (IBM)",
        "https://www.simplilearn.com/big-data-and-analytics/senior-data-scientist-masters-program-training",
    ),
    (
        "Data Science Foundations: Fundamentals by LinkedIn",
        "https://www.linkedin.com/learning/data-science-foundations-fundamentals-5",
    ),
    (
        "Data Scientist with Python",
        "https://www.datacamp.com/tracks/data-scientist-with-python",
    ),
    (
        "Programming for Data Science with Python",
        "https://www.udacity.com/course/programming-for-data-science-nanodegree--nd104",
    ),
    (
        "Programming for Data Science with R",
        "https://www.udacity.com/course/programming-for-data-science-nanodegree-with-R--nd118",
    ),
    (
        "Introduction to Data Science",
        "https://www.udacity.com/course/introduction-to-data-science--cd0017",
    ),
    (
        "Intro to Machine Learning with TensorFlow",
        "https://www.udacity.com/course/intro-to-machine-learning-with-tensorflow-nanodegree--nd230",
    ),
];

pub const WEB_KEYWORDS: &[&str] = &[
    "react",
    "django",
    "node jS",
    "react js",
    "php",
    "laravel",
    "magento",
    "wordpress",
    "javascript",
    "angular js",
    "c#",
    "flask",
    "web development",
];

pub const WEB_SKILLS: &[&str] = &[
    "React",
    "Django",
    "Node JS",
    "React JS",
    "php",
    "laravel",
    "Magento",
    "wordpress",
    "Javascript",
    "Angular JS",
    "c#",
    "Flask",
    "SDK",
];

pub const WEB_COURSES: &[(&str, &str)] = &[
    ("Django Crash course [Free]", "https://youtu.be/e1IyzVyrLSU"),
    (
        "Python and Django Full Stack Web Developer Bootcamp",
        "https://www.udemy.com/course/python-and-django-full-stack-web-developer-bootcamp",
    ),
    ("React Crash Course [Free]", "https://youtu.be/Dorf8i6lCuk"),
    (
        "ReactJS Project Development Training",
        "https://www.dotnettricks.com/training/masters-program/reactjs-certification-training",
    ),
    (
        "Full Stack Web Developer - MEAN Stack",
        "https://www.simplilearn.com/full-stack-web-developer-mean-stack-certification-training",
    ),
    ("Node.js and Express.js [Free]", "https://youtu.be/Oe421EPjeBE"),
    (
        "Flask: Develop Web Applications in Python",
        "https://www.educative.io/courses/flask-develop-web-applications-in-python",
    ),
    (
        "Full Stack Web Developer by Udacity",
        "https://www.udacity.com/course/full-stack-web-developer-nanodegree--nd0044",
    ),
    (
        "Front End Web Developer by Udacity",
        "https://www.udacity.com/course/front-end-web-developer-nanodegree--nd0011",
    ),
    (
        "Become a React Developer by Udacity",
        "https://www.udacity.com/course/react-nanodegree--nd019",
    ),
];

pub const ANDROID_KEYWORDS: &[&str] = &[
    "android",
    "android development",
    "flutter",
    "kotlin",
    "xml",
    "kivy",
];

pub const ANDROID_SKILLS: &[&str] = &[
    "Android",
    "Android development",
    "Flutter",
    "Kotlin",
    "XML",
    "Java",
    "Kivy",
    "GIT",
    "SDK",
    "SQLite",
];

pub const ANDROID_COURSES: &[(&str, &str)] = &[
    (
        "Android Development for Beginners [Free]",
        "https://youtu.be/fis26HvvDII",
    ),
    (
        "Android App Development Specialization",
        "https://www.coursera.org/specializations/android-app-development",
    ),
    (
        "Associate Android Developer Certification",
        "https://grow.google/androiddev/#?modal_active=none",
    ),
    (
        "Become an Android Kotlin Developer by Udacity",
        "https://www.udacity.com/course/android-kotlin-developer-nanodegree--nd940",
    ),
    (
        "Android Basics by Google",
        "https://www.udacity.com/course/android-basics-nanodegree-by-google--nd803",
    ),
    (
        "The Complete Android Developer Course",
        "https://www.udemy.com/course/complete-android-n-developer-course/",
    ),
    (
        "Building an Android App with Architecture Components",
        "https://www.linkedin.com/learning/building-an-android-app-with-architecture-components",
    ),
    (
        "Android App Development Masterclass using Kotlin",
        "https://www.udemy.com/course/android-oreo-kotlin-app-masterclass/",
    ),
    (
        "Flutter & Dart - The Complete Flutter App Development Course",
        "https://www.udemy.com/course/flutter-dart-the-complete-flutter-app-development-course/",
    ),
    (
        "Flutter App Development Course [Free]",
        "https://youtu.be/rZLR5olMR64",
    ),
];

pub const IOS_KEYWORDS: &[&str] = &[
    "ios",
    "ios development",
    "swift",
    "cocoa",
    "cocoa touch",
    "xcode",
];

pub const IOS_SKILLS: &[&str] = &[
    "IOS",
    "IOS Development",
    "Swift",
    "Cocoa",
    "Cocoa Touch",
    "Xcode",
    "Objective-C",
    "SQLite",
    "Plist",
    "StoreKit",
    "UI-Kit",
    "AV Foundation",
    "Auto-Layout",
];

pub const IOS_COURSES: &[(&str, &str)] = &[
    (
        "IOS App Development by LinkedIn",
        "https://www.linkedin.com/learning/subscription/topics/ios",
    ),
    (
        "iOS & Swift - The Complete iOS App Development Bootcamp",
        "https://www.udemy.com/course/ios-13-app-development-bootcamp/",
    ),
    (
        "Become an iOS Developer",
        "https://www.udacity.com/course/ios-developer-nanodegree--nd003",
    ),
    (
        "iOS App Development with Swift Specialization",
        "https://www.coursera.org/specializations/app-development",
    ),
    (
        "Mobile App Development with Swift",
        "https://www.edx.org/professional-certificate/curtinx-mobile-app-development-with-swift",
    ),
    (
        "Swift Course by LinkedIn",
        "https://www.linkedin.com/learning/subscription/topics/swift-2",
    ),
    (
        "Objective-C Crash Course for Swift Developers",
        "https://www.udemy.com/course/objectivec/",
    ),
    (
        "Learn Swift by Codecademy",
        "https://www.codecademy.com/learn/learn-swift",
    ),
    (
        "Swift Tutorial - Full Course for Beginners [Free]",
        "https://youtu.be/comQ1-x2a1Q",
    ),
    ("Learn Swift Fast - [Free]", "https://youtu.be/FcsY1YPBwzQ"),
];

pub const UIUX_KEYWORDS: &[&str] = &[
    "ux",
    "adobe xd",
    "figma",
    "zeplin",
    "balsamiq",
    "ui",
    "prototyping",
    "wireframes",
    "storyframes",
    "adobe photoshop",
    "photoshop",
    "editing",
    "adobe illustrator",
    "illustrator",
    "adobe after effects",
    "after effects",
    "adobe premier pro",
    "premier pro",
    "adobe indesign",
    "indesign",
    "wireframe",
    "solid",
    "grasp",
    "user research",
    "user experience",
];

pub const UIUX_SKILLS: &[&str] = &[
    "UI",
    "User Experience",
    "Adobe XD",
    "Figma",
    "Zeplin",
    "Balsamiq",
    "Prototyping",
    "Wireframes",
    "Storyframes",
    "Adobe Photoshop",
    "Editing",
    "Illustrator",
    "After Effects",
    "Premier Pro",
    "Indesign",
    "Wireframe",
    "Solid",
    "Grasp",
    "User Research",
];

pub const UIUX_COURSES: &[(&str, &str)] = &[
    (
        "Google UX Design Professional Certificate",
        "https://www.coursera.org/professional-certificates/google-ux-design",
    ),
    (
        "UI / UX Design Specialization",
        "https://www.coursera.org/specializations/ui-ux-design",
    ),
    (
        "The Complete App Design Course - UX, UI and Design Thinking",
        "https://www.udemy.com/course/the-complete-app-design-course-ux-and-ui-design/",
    ),
    (
        "UX & Web Design Master Course: Strategy, Design, Development",
        "https://www.udemy.com/course/ux-web-design-master-course-strategy-design-development/",
    ),
    (
        "DESIGN RULES: Principles + Practices for Great UI Design",
        "https://www.udemy.com/course/design-rules/",
    ),
    (
        "Become a UX Designer by Udacity",
        "https://www.udacity.com/course/ux-designer-nanodegree--nd578",
    ),
    (
        "Adobe XD Tutorial: User Experience Design Course [Free]",
        "https://youtu.be/68w2VwalD5w",
    ),
    ("Adobe XD for Beginners [Free]", "https://youtu.be/WEljsc2jorI"),
    ("Adobe XD in Simple Way", "https://learnux.io/course/adobe-xd"),
    (
        "Figma UI UX Design Essentials",
        "https://www.udemy.com/course/figma-ux-ui-design-user-experience-tutorial-course/",
    ),
];
