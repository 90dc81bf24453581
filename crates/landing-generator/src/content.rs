//! Fixed copy of the home page.

/// Hero title.
pub const HERO_TITLE: &str = "React Native";

/// Hero subtitle.
pub const HERO_TAGLINE: &str = "Build native mobile apps using JavaScript and React";

/// A navigation button below the hero text.
#[derive(Debug, Clone, Copy)]
pub struct CallToAction {
    pub label: &'static str,
    /// Target relative to the base URL.
    pub path: &'static str,
}

/// Buttons shown in the hero and again at the bottom of the page.
pub const CALLS_TO_ACTION: [CallToAction; 2] = [
    CallToAction {
        label: "Get Started",
        path: "docs/getting-started.html",
    },
    CallToAction {
        label: "Learn the Basics",
        path: "docs/tutorial.html",
    },
];

/// What sits beside a feature's text.
#[derive(Debug, Clone, Copy)]
pub enum Illustration {
    /// Markdown containing a fenced code sample.
    Code(&'static str),
    /// An image.
    Image {
        src: &'static str,
        alt: &'static str,
    },
}

/// Text of a feature block.
#[derive(Debug, Clone, Copy)]
pub enum Body {
    Markdown(&'static str),
    /// Plain text around one link into the site; `path` is relative to the base URL.
    Linked {
        before: &'static str,
        label: &'static str,
        path: &'static str,
        after: &'static str,
    },
}

/// One feature block.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub heading: &'static str,
    pub body: Body,
    pub illustration: Illustration,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        heading: "Build native mobile apps using JavaScript and React",
        body: Body::Markdown(
            "React Native lets you build mobile apps using only JavaScript. \
It uses the same design as React, letting you compose a rich mobile UI from \
declarative components.",
        ),
        illustration: Illustration::Code(
            r#"```javascript
import React, { Component } from 'react';
import { Text, View } from 'react-native';

class WhyReactNativeIsSoGreat extends Component {
  render() {
    return (
      <View>
        <Text>
          If you like React on the web, you'll like React Native.
        </Text>
        <Text>
          You just use native components like 'View' and 'Text',
          instead of web components like 'div' and 'span'.
        </Text>
      </View>
    );
  }
}
```"#,
        ),
    },
    Feature {
        heading: "A React Native app is a real mobile app",
        body: Body::Markdown(
            "With React Native, you don't build a \"mobile web app\", an \"HTML5 app\", \
or a \"hybrid app\". You build a real mobile app that's indistinguishable from an app \
built using Objective-C or Java. React Native uses the same fundamental UI building \
blocks as regular iOS and Android apps. You just put those building blocks together \
using JavaScript and React.",
        ),
        illustration: Illustration::Code(
            r#"```javascript
import React, { Component } from 'react';
import { Image, ScrollView, Text } from 'react-native';

class AwkwardScrollingImageWithText extends Component {
  render() {
    return (
      <ScrollView>
        <Image
          source={{uri: 'https://i.chzbgr.com/full/7345954048/h7E2C65F9/'}}
          style={{width: 320, height:180}}
        />
        <Text>
          On iOS, a React Native ScrollView uses a native UIScrollView.
          On Android, it uses a native ScrollView.

          On iOS, a React Native Image uses a native UIImageView.
          On Android, it uses a native ImageView.

          React Native wraps the fundamental native components, giving you
          the performance of a native app, plus the clean design of React.
        </Text>
      </ScrollView>
    );
  }
}
```"#,
        ),
    },
    Feature {
        heading: "Don't waste time recompiling",
        body: Body::Linked {
            before: "React Native lets you build your app faster. Instead of recompiling, \
you can reload your app instantly. With ",
            label: "Hot Reloading",
            path: "blog/2016/03/24/introducing-hot-reloading.html",
            after: ", you can even run new code while retaining your application state. \
Give it a try - it's a magical experience.",
        },
        illustration: Illustration::Image {
            src: "https://media.giphy.com/media/13WZniThXy0hSE/giphy.gif",
            alt: "Hot Reloading Demonstration",
        },
    },
    Feature {
        heading: "Use native code when you need to",
        body: Body::Markdown(
            "React Native combines smoothly with components written in Objective-C, \
Java, or Swift. It's simple to drop down to native code if you need to optimize a few \
aspects of your application. It's also easy to build part of your app in React Native, \
and part of your app using native code directly - that's how the Facebook app works.",
        ),
        illustration: Illustration::Code(
            r#"```javascript
import React, { Component } from 'react';
import { Text, View } from 'react-native';
import { TheGreatestComponentInTheWorld } from './your-native-code';

class SomethingFast extends Component {
  render() {
    return (
      <View>
        <TheGreatestComponentInTheWorld />
        <Text>
          TheGreatestComponentInTheWorld could use native Objective-C,
          Java, or Swift - the product development process is the same.
        </Text>
      </View>
    );
  }
}
```"#,
        ),
    },
];

/// Showcase heading.
pub const SHOWCASE_HEADING: &str = "Who's using React Native?";

/// Showcase intro, followed by a link to the full showcase page.
pub const SHOWCASE_INTRO: &str = "Thousands of apps are using React Native, from \
established Fortune 500 companies to hot new startups. If you're curious to see what \
can be accomplished with React Native, ";

/// Label of the link to the full showcase.
pub const SHOWCASE_LINK_LABEL: &str = "check out these apps";

/// Full showcase page, relative to the base URL.
pub const SHOWCASE_PAGE: &str = "showcase.html";
